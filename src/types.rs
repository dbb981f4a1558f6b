//! Plain geometric value types shared by shapes, layouts and surfaces.
//!
//! Everything is measured in surface pixels with the origin at the top-left
//! corner and y growing downwards.

use std::fmt;

use glam::{DVec2, dvec2};

/// An immutable 2D coordinate
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Whether this point lies on the segment `a`→`b`.
    ///
    /// Collinearity is an exact cross-product test (no epsilon). When the
    /// point is collinear, the range check runs on whichever axis the segment
    /// spans more of, honoring the segment's direction along that axis.
    pub fn on_segment(self, a: Point, b: Point) -> bool {
        let to_point = DVec2::from(self) - DVec2::from(a);
        let along = DVec2::from(b) - DVec2::from(a);

        if to_point.perp_dot(along) != 0.0 {
            return false;
        }

        if along.x.abs() >= along.y.abs() {
            within(self.x, a.x, b.x, along.x > 0.0)
        } else {
            within(self.y, a.y, b.y, along.y > 0.0)
        }
    }
}

fn within(v: f64, from: f64, to: f64, ascending: bool) -> bool {
    if ascending {
        from <= v && v <= to
    } else {
        to <= v && v <= from
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> DVec2 {
        dvec2(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a drawable
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub const fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    pub const fn square(side: f64) -> Self {
        Size { w: side, h: side }
    }
}

/// A single value sets both dimensions.
impl From<f64> for Size {
    fn from(side: f64) -> Size {
        Size::square(side)
    }
}

impl From<(f64, f64)> for Size {
    fn from((w, h): (f64, f64)) -> Size {
        Size::new(w, h)
    }
}

/// Axis-aligned rectangle in client coordinates, as reported by the host
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Translate a client-space coordinate into this rectangle's local space
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }
}

/// Computed padding of a container element
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const ZERO: Padding = Padding { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    pub const fn uniform(v: f64) -> Self {
        Padding { top: v, right: v, bottom: v, left: v }
    }

    /// Shrink a client size to the content box inside this padding
    pub fn content_size(&self, client: Size) -> Size {
        Size::new(
            client.w - self.left - self.right,
            client.h - self.top - self.bottom,
        )
    }
}

/// Paint color; kept as the raw CSS-style string the renderer understands.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
    Raw(String),
}

impl Color {
    /// An empty raw color means "do not paint"
    pub fn is_empty(&self) -> bool {
        matches!(self, Color::Raw(s) if s.is_empty())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::Raw(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::Raw(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Raw(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

//! The drawable capability set shared by every shape.
//!
//! Each shape embeds a [`ShapeCommon`] by value and implements [`Drawable`]
//! on top of it. Getters and chaining setters come for free through the
//! [`DrawableExt`] blanket impl.

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use crate::defaults;
use crate::renderer::{Renderer, TextAlign, TextBaseline};
use crate::types::{Color, Point, Size};

/// One or more lines of text centered inside a drawable's box
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    lines: Vec<String>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Label { lines: vec![text.into()] }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::new(s)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::new(s)
    }
}

impl From<Vec<String>> for Label {
    fn from(lines: Vec<String>) -> Self {
        Label { lines }
    }
}

impl From<&[&str]> for Label {
    fn from(lines: &[&str]) -> Self {
        Label { lines: lines.iter().map(|s| s.to_string()).collect() }
    }
}

impl<const N: usize> From<[&str; N]> for Label {
    fn from(lines: [&str; N]) -> Self {
        Label { lines: lines.iter().map(|s| s.to_string()).collect() }
    }
}

/// Font used to paint a label
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    pub color: Color,
    pub size: f64,
}

impl Default for Font {
    fn default() -> Self {
        Font {
            name: defaults::FONT_NAME.to_string(),
            color: Color::from(defaults::FONT_COLOR),
            size: defaults::FONT_SIZE,
        }
    }
}

impl Font {
    /// CSS shorthand understood by 2D contexts, e.g. `14px Verdana`
    pub fn css(&self) -> String {
        format!("{}px {}", self.size, self.name)
    }
}

/// Base geometry embedded in every shape: box, optional label, font.
///
/// Sizes are expected to be non-negative but nothing enforces it; NaN passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeCommon {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub label: Option<Label>,
    pub font: Font,
}

impl ShapeCommon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point-in-rectangle test by projecting onto two adjacent edges.
    ///
    /// With corners A (top-left), B (top-right) and C (bottom-right), the
    /// point M is inside iff `0 <= AB·AM <= AB·AB` and `0 <= BC·BM <= BC·BC`.
    /// Edges are closed. A zero-length edge constrains nothing along its axis.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let m = dvec2(x, y);
        let a = dvec2(self.x, self.y);
        let b = dvec2(self.x + self.w, self.y);
        let c = dvec2(self.x + self.w, self.y + self.h);

        let ab = b - a;
        let bc = c - b;
        let ab_am = ab.dot(m - a);
        let bc_bm = bc.dot(m - b);

        (0.0..=ab.dot(ab)).contains(&ab_am) && (0.0..=bc.dot(bc)).contains(&bc_bm)
    }

    /// Paint the label centered in the box; no label paints nothing.
    pub fn render_label(&self, renderer: &mut dyn Renderer) {
        let Some(label) = &self.label else {
            return;
        };
        let lines = label.lines();
        if lines.is_empty() {
            return;
        }

        let line_height = self.font.size;
        let cx = self.x + self.w / 2.0;
        let first = self.y + self.h / 2.0 - line_height * (lines.len() - 1) as f64 / 2.0;

        renderer.save();
        renderer.set_font(&self.font.css());
        renderer.set_fill_style(&self.font.color);
        renderer.set_text_align(TextAlign::Center);
        renderer.set_text_baseline(TextBaseline::Middle);
        for (i, line) in lines.iter().enumerate() {
            renderer.fill_text(line, cx, first + line_height * i as f64);
        }
        renderer.restore();
    }
}

/// Something that can be painted and hit-tested.
#[enum_dispatch]
pub trait Drawable {
    fn common(&self) -> &ShapeCommon;

    fn common_mut(&mut self) -> &mut ShapeCommon;

    /// Paint onto `renderer`. The default paints only the label.
    fn render(&self, renderer: &mut dyn Renderer) {
        self.common().render_label(renderer);
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        self.common().contains_point(x, y)
    }
}

/// Getters and chaining setters for anything [`Drawable`]
pub trait DrawableExt: Drawable {
    fn width(&self) -> f64 {
        self.common().w
    }

    fn height(&self) -> f64 {
        self.common().h
    }

    fn size(&self) -> Size {
        Size::new(self.common().w, self.common().h)
    }

    /// A fresh point at the current `(x, y)`
    fn position(&self) -> Point {
        Point::new(self.common().x, self.common().y)
    }

    fn label(&self) -> Option<&Label> {
        self.common().label.as_ref()
    }

    fn font(&self) -> &Font {
        &self.common().font
    }

    fn set_width(&mut self, w: f64) -> &mut Self {
        self.common_mut().w = w;
        self
    }

    fn set_height(&mut self, h: f64) -> &mut Self {
        self.common_mut().h = h;
        self
    }

    /// `set_size(5.0)` makes a square, `set_size((5.0, 2.0))` sets both sides
    fn set_size(&mut self, size: impl Into<Size>) -> &mut Self {
        let size = size.into();
        let common = self.common_mut();
        common.w = size.w;
        common.h = size.h;
        self
    }

    /// NaN coordinates fall back to 0. There is no one-argument form: to
    /// move along x only, pass `0.0` (or NaN) for `y`.
    fn set_position(&mut self, x: f64, y: f64) -> &mut Self {
        let common = self.common_mut();
        common.x = or_zero(x);
        common.y = or_zero(y);
        self
    }

    fn set_label(&mut self, label: impl Into<Label>) -> &mut Self {
        self.common_mut().label = Some(label.into());
        self
    }

    fn clear_label(&mut self) -> &mut Self {
        self.common_mut().label = None;
        self
    }

    fn set_font(&mut self, font: Font) -> &mut Self {
        self.common_mut().font = font;
        self
    }
}

impl<T: Drawable + ?Sized> DrawableExt for T {}

fn or_zero(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v }
}

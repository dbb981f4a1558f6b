//! Shape types
//!
//! Each shape embeds the shared [`ShapeCommon`] and knows how to paint
//! itself through a [`Renderer`]. Hit testing is the shared box test for all
//! of them.

use std::f64::consts::TAU;

use enum_dispatch::enum_dispatch;

use crate::defaults;
use crate::drawable::{Drawable, ShapeCommon};
use crate::renderer::Renderer;
use crate::types::Color;

// ============================================================================
// Shape Types
// ============================================================================

/// A bare drawable: a box with an optional label and nothing else
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextShape {
    pub common: ShapeCommon,
}

impl TextShape {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Drawable for TextShape {
    fn common(&self) -> &ShapeCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ShapeCommon {
        &mut self.common
    }
}

/// A circle centered on the drawable's `(x, y)`
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub common: ShapeCommon,
    /// `None` (or an empty color) leaves the disc unfilled
    pub fill: Option<Color>,
    pub stroke: Color,
    pub line_width: f64,
    pub radius: f64,
}

impl Default for CircleShape {
    fn default() -> Self {
        Self {
            common: ShapeCommon::default(),
            fill: None,
            stroke: Color::from(defaults::CIRCLE_STROKE),
            line_width: defaults::LINE_WIDTH,
            radius: 0.0,
        }
    }
}

impl CircleShape {
    pub fn new(radius: f64) -> Self {
        Self { radius, ..Self::default() }
    }

    pub fn with_fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<Color>) -> Self {
        self.stroke = stroke.into();
        self
    }

    fn fill_color(&self) -> Option<&Color> {
        self.fill.as_ref().filter(|c| !c.is_empty())
    }
}

impl Drawable for CircleShape {
    fn common(&self) -> &ShapeCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ShapeCommon {
        &mut self.common
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        let fill = self.fill_color();

        renderer.save();
        renderer.begin_path();
        if let Some(fill) = fill {
            renderer.set_fill_style(fill);
        }
        renderer.set_stroke_style(&self.stroke);
        renderer.set_line_width(self.line_width);
        renderer.arc(self.common.x, self.common.y, self.radius, 0.0, TAU);
        if fill.is_some() {
            renderer.fill();
        }
        renderer.stroke();
        renderer.restore();
    }
}

/// A segment from `(x, y)` to `(w, h)`.
///
/// The base width/height are the second endpoint here, not a size.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub common: ShapeCommon,
    pub stroke: Color,
    pub line_width: f64,
}

impl Default for LineShape {
    fn default() -> Self {
        Self {
            common: ShapeCommon::default(),
            stroke: Color::from(defaults::LINE_STROKE),
            line_width: defaults::LINE_WIDTH,
        }
    }
}

impl LineShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stroke width; zero or NaN keeps the default of 1
    pub fn with_width(line_width: f64) -> Self {
        let line_width = if line_width == 0.0 || line_width.is_nan() {
            defaults::LINE_WIDTH
        } else {
            line_width
        };
        Self { line_width, ..Self::default() }
    }

    pub fn between(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut line = Self::default();
        line.common.x = x1;
        line.common.y = y1;
        line.common.w = x2;
        line.common.h = y2;
        line
    }

    pub fn with_stroke(mut self, stroke: impl Into<Color>) -> Self {
        self.stroke = stroke.into();
        self
    }
}

impl Drawable for LineShape {
    fn common(&self) -> &ShapeCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ShapeCommon {
        &mut self.common
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.save();
        self.common.render_label(renderer);
        renderer.begin_path();
        renderer.set_stroke_style(&self.stroke);
        renderer.set_line_width(self.line_width);
        renderer.move_to(self.common.x, self.common.y);
        renderer.line_to(self.common.w, self.common.h);
        renderer.stroke();
        renderer.restore();
    }
}

/// A filled axis-aligned rectangle.
///
/// The label is painted before the fill, so the fill covers it wherever
/// they overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    pub common: ShapeCommon,
    pub fill: Color,
}

impl Default for RectangleShape {
    fn default() -> Self {
        Self {
            common: ShapeCommon::default(),
            fill: Color::from(defaults::RECTANGLE_FILL),
        }
    }
}

impl RectangleShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = fill.into();
        self
    }
}

impl Drawable for RectangleShape {
    fn common(&self) -> &ShapeCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ShapeCommon {
        &mut self.common
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        let c = &self.common;
        renderer.save();
        c.render_label(renderer);
        renderer.set_fill_style(&self.fill);
        renderer.fill_rect(c.x, c.y, c.w, c.h);
        renderer.restore();
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// Every shape a [`Scene`](crate::scene::Scene) can hold
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Text(TextShape),
    Circle(CircleShape),
    Line(LineShape),
    Rectangle(RectangleShape),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Text(_) => "text",
            Shape::Circle(_) => "circle",
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

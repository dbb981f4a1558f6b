//! The drawing capability shapes paint through.
//!
//! [`Renderer`] mirrors the subset of an immediate-mode 2D context that the
//! shapes need. Hosts implement it over their real backend; [`Recorder`]
//! implements it as a display list, which is what the headless host and the
//! tests use.

use std::fmt;

use crate::types::Color;

/// Horizontal anchor for [`Renderer::fill_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical anchor for [`Renderer::fill_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
            TextAlign::End => "end",
        })
    }
}

impl fmt::Display for TextBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Bottom => "bottom",
        })
    }
}

/// A 2D drawing context.
///
/// State setters (`set_*`) affect every following paint call until the
/// matching [`restore`](Renderer::restore).
pub trait Renderer {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill_style(&mut self, color: &Color);
    fn set_stroke_style(&mut self, color: &Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Arc around `(cx, cy)`; angles in radians, clockwise in screen space
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// One recorded call on a [`Recorder`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    Save,
    Restore,
    FillStyle(Color),
    StrokeStyle(Color),
    LineWidth(f64),
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
    Fill,
    Stroke,
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    FillText { text: String, x: f64, y: f64 },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::ClearRect { x, y, w, h } => write!(f, "clear_rect {} {} {} {}", x, y, w, h),
            DrawCommand::Save => write!(f, "save"),
            DrawCommand::Restore => write!(f, "restore"),
            DrawCommand::FillStyle(c) => write!(f, "fill_style {}", c),
            DrawCommand::StrokeStyle(c) => write!(f, "stroke_style {}", c),
            DrawCommand::LineWidth(w) => write!(f, "line_width {}", w),
            DrawCommand::Font(font) => write!(f, "font {}", font),
            DrawCommand::TextAlign(a) => write!(f, "text_align {}", a),
            DrawCommand::TextBaseline(b) => write!(f, "text_baseline {}", b),
            DrawCommand::BeginPath => write!(f, "begin_path"),
            DrawCommand::MoveTo { x, y } => write!(f, "move_to {} {}", x, y),
            DrawCommand::LineTo { x, y } => write!(f, "line_to {} {}", x, y),
            DrawCommand::Arc { cx, cy, radius, start, end } => {
                write!(f, "arc {} {} {} {} {}", cx, cy, radius, start, end)
            }
            DrawCommand::Fill => write!(f, "fill"),
            DrawCommand::Stroke => write!(f, "stroke"),
            DrawCommand::FillRect { x, y, w, h } => write!(f, "fill_rect {} {} {} {}", x, y, w, h),
            DrawCommand::FillText { text, x, y } => write!(f, "fill_text {:?} {} {}", text, x, y),
        }
    }
}

/// A renderer that records every call instead of painting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the display list, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of full-surface clears seen, i.e. frames started
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::ClearRect { .. }))
            .count()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl fmt::Display for Recorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}

impl Renderer for Recorder {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn set_fill_style(&mut self, color: &Color) {
        self.push(DrawCommand::FillStyle(color.clone()));
    }

    fn set_stroke_style(&mut self, color: &Color) {
        self.push(DrawCommand::StrokeStyle(color.clone()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.push(DrawCommand::TextBaseline(baseline));
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.push(DrawCommand::Arc { cx, cy, radius, start, end });
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.push(DrawCommand::FillText { text: text.to_string(), x, y });
    }
}

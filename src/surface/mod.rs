//! Drawing surfaces
//!
//! The renderer only talks to [`DrawingContext`], a small canvas-style API
//! with a current path, a current stroke style and a transform stack.

use egui::{Color32, Pos2, Rect, Vec2};

pub mod painter;
pub mod recording;

pub use painter::PainterSurface;
pub use recording::{DrawCommand, RecordingSurface};

/// Immediate-mode 2D drawing API consumed by the frame renderer.
///
/// Coordinates are in the current user space, i.e. after every `translate`
/// since the last matching `restore`.
pub trait DrawingContext {
    fn fill_rect(&mut self, rect: Rect, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Push the current transform
    fn save(&mut self);

    /// Pop the transform pushed by the matching `save`
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    /// Discard the current path and start an empty one
    fn begin_path(&mut self);

    fn move_to(&mut self, point: Pos2);

    fn quadratic_curve_to(&mut self, control: Pos2, end: Pos2);

    fn set_line_width(&mut self, width: f32);

    fn set_stroke_color(&mut self, color: Color32);

    /// Stroke the current path with the current line width and color
    fn stroke(&mut self);
}

/// A single quadratic Bézier segment in user space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub start: Pos2,
    pub control: Pos2,
    pub end: Pos2,
}

/// Path under construction.
///
/// Mirrors canvas semantics: a `move_to` only moves the pen, so a path that
/// holds nothing but moves strokes nothing. A curve with no preceding
/// `move_to` starts at its own control point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pen: Option<Pos2>,
    segments: Vec<QuadSegment>,
}

impl Path {
    pub fn clear(&mut self) {
        self.pen = None;
        self.segments.clear();
    }

    pub fn move_to(&mut self, point: Pos2) {
        self.pen = Some(point);
    }

    pub fn quadratic_curve_to(&mut self, control: Pos2, end: Pos2) {
        let start = self.pen.unwrap_or(control);
        self.segments.push(QuadSegment { start, control, end });
        self.pen = Some(end);
    }

    pub fn segments(&self) -> &[QuadSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

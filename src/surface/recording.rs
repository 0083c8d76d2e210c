use egui::{Color32, Pos2, Rect, Vec2};

use super::{DrawingContext, Path, QuadSegment};

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    FillCircle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Save,
    Restore,
    Translate(Vec2),
    BeginPath,
    MoveTo(Pos2),
    QuadraticCurveTo {
        control: Pos2,
        end: Pos2,
    },
    SetLineWidth(f32),
    SetStrokeColor(Color32),
    /// Snapshot of the path at stroke time, with the active style and
    /// the accumulated translation
    Stroke {
        segments: Vec<QuadSegment>,
        width: f32,
        color: Color32,
        offset: Vec2,
    },
}

/// Surface that draws nothing and keeps a log of every call.
///
/// Used for headless inspection of a frame (stroke counts, curve placement)
/// without a window.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    path: Path,
    line_width: f32,
    stroke_color: Color32,
    offset: Vec2,
    saved: Vec<Vec2>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            path: Path::default(),
            line_width: 1.0,
            stroke_color: Color32::BLACK,
            offset: Vec2::ZERO,
            saved: Vec::new(),
        }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget recorded commands; transform and style are kept
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&[QuadSegment], f32, Color32)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Stroke {
                segments,
                width,
                color,
                ..
            } => Some((segments.as_slice(), *width, *color)),
            _ => None,
        })
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes().count()
    }

    /// Number of curve segments that actually got stroked
    pub fn stroked_curve_count(&self) -> usize {
        self.strokes().map(|(segments, _, _)| segments.len()).sum()
    }

    /// Current accumulated translation
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

impl DrawingContext for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn save(&mut self) {
        self.saved.push(self.offset);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.saved.pop() {
            self.offset = offset;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.offset += offset;
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn quadratic_curve_to(&mut self, control: Pos2, end: Pos2) {
        self.path.quadratic_curve_to(control, end);
        self.commands
            .push(DrawCommand::QuadraticCurveTo { control, end });
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke {
            segments: self.path.segments().to_vec(),
            width: self.line_width,
            color: self.stroke_color,
            offset: self.offset,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_stroke_snapshots_path_and_style() {
        let mut surface = RecordingSurface::new();
        surface.translate(vec2(10.0, 20.0));
        surface.begin_path();
        surface.move_to(pos2(0.0, 0.0));
        surface.quadratic_curve_to(pos2(1.0, 1.0), pos2(2.0, 0.0));
        surface.set_line_width(3.0);
        surface.set_stroke_color(Color32::RED);
        surface.stroke();

        let strokes: Vec<_> = surface.strokes().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].0.len(), 1);
        assert_eq!(strokes[0].1, 3.0);
        assert_eq!(strokes[0].2, Color32::RED);
        assert!(matches!(
            surface.commands().last(),
            Some(DrawCommand::Stroke { offset, .. }) if *offset == vec2(10.0, 20.0)
        ));
    }

    #[test]
    fn test_save_restore_translation() {
        let mut surface = RecordingSurface::new();
        surface.translate(vec2(1.0, 1.0));
        surface.save();
        surface.translate(vec2(5.0, 5.0));
        assert_eq!(surface.offset(), vec2(6.0, 6.0));
        surface.restore();
        assert_eq!(surface.offset(), vec2(1.0, 1.0));
        // Unbalanced restore keeps the current transform
        surface.restore();
        assert_eq!(surface.offset(), vec2(1.0, 1.0));
    }

    #[test]
    fn test_begin_path_resets_segments() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.quadratic_curve_to(pos2(1.0, 1.0), pos2(2.0, 0.0));
        surface.stroke();
        surface.begin_path();
        surface.move_to(pos2(0.0, 0.0));
        surface.stroke();
        assert_eq!(surface.stroke_count(), 2);
        assert_eq!(surface.stroked_curve_count(), 1);

        surface.clear();
        assert!(surface.commands().is_empty());
    }
}

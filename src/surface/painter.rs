use egui::emath::TSTransform;
use egui::epaint::{CircleShape, QuadraticBezierShape};
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use super::{DrawingContext, Path};

/// [`DrawingContext`] backed by an egui [`Painter`].
///
/// The sketch works in logical canvas units; `base` maps them onto the
/// screen rect the canvas was allocated in, so strokes scale with it.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    transform: TSTransform,
    saved: Vec<TSTransform>,
    path: Path,
    line_width: f32,
    stroke_color: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, base: TSTransform) -> Self {
        Self {
            painter,
            transform: base,
            saved: Vec::new(),
            path: Path::default(),
            line_width: 1.0,
            stroke_color: Color32::BLACK,
        }
    }

    /// Fit a square logical canvas of `canvas_size` units into `screen_rect`,
    /// centered and letterboxed
    pub fn fit(painter: &'a Painter, screen_rect: Rect, canvas_size: f32) -> Self {
        Self::new(painter, fit_transform(screen_rect, canvas_size))
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.transform * point
    }
}

/// Transform that maps `[0, canvas_size]²` onto the largest centered square
/// inside `screen_rect`
pub fn fit_transform(screen_rect: Rect, canvas_size: f32) -> TSTransform {
    let side = screen_rect.width().min(screen_rect.height());
    let scaling = side / canvas_size.max(f32::EPSILON);
    let corner = screen_rect.center() - Vec2::splat(side / 2.0);
    TSTransform::new(corner.to_vec2(), scaling)
}

impl DrawingContext for PainterSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let screen = Rect::from_two_pos(self.to_screen(rect.min), self.to_screen(rect.max));
        self.painter.rect_filled(screen, 0.0, color);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.add(CircleShape::filled(
            self.to_screen(center),
            radius * self.transform.scaling,
            color,
        ));
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * TSTransform::from_translation(offset);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(self.to_screen(point));
    }

    fn quadratic_curve_to(&mut self, control: Pos2, end: Pos2) {
        self.path
            .quadratic_curve_to(self.to_screen(control), self.to_screen(end));
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn stroke(&mut self) {
        let stroke = Stroke::new(self.line_width * self.transform.scaling, self.stroke_color);
        for segment in self.path.segments() {
            self.painter.add(QuadraticBezierShape::from_points_stroke(
                [segment.start, segment.control, segment.end],
                false,
                Color32::TRANSPARENT,
                stroke,
            ));
        }
    }
}

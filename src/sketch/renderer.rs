use egui::{vec2, Color32, Pos2, Rect, Vec2};

use super::config::SketchConfig;
use super::grid::{GridLayout, Point};
use super::noise::NoiseField;
use crate::surface::DrawingContext;

/// Draws the sketch one frame at a time.
///
/// Holds only the immutable settings; the points are lent in on each call.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    layout: GridLayout,
    midpoint_weight: Vec2,
    animated: bool,
    drift_factor: f32,
    frame_step: f64,
    base_line_width: f32,
    point_radius: f32,
}

impl FrameRenderer {
    pub fn new(config: &SketchConfig, layout: GridLayout) -> Self {
        Self {
            layout,
            midpoint_weight: vec2(config.midpoint_weight.0, config.midpoint_weight.1),
            animated: config.animated,
            drift_factor: config.drift_factor,
            frame_step: config.frame_step,
            base_line_width: config.base_line_width,
            point_radius: config.point_radius,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Move every point to its noise-displaced position for `frame`.
    ///
    /// The field is sampled at the initial position shifted right by
    /// `frame * frame_step`; static sketches are left untouched.
    pub fn animate(&self, points: &mut [Point], noise: &NoiseField, frame: u64) {
        if !self.animated {
            return;
        }
        let shift = frame as f64 * self.frame_step;
        for point in points.iter_mut() {
            let anchor = point.initial_position;
            let n = noise.sample(anchor.x as f64 + shift, anchor.y as f64) as f32;
            point.position = anchor + Vec2::splat(n);
        }
    }

    /// Clear the canvas, update positions and stroke every segment
    pub fn render(
        &self,
        surface: &mut impl DrawingContext,
        points: &mut [Point],
        noise: &NoiseField,
        size: Vec2,
        frame: u64,
        show_points: bool,
    ) {
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, size), Color32::BLACK);

        self.animate(points, noise, frame);

        surface.save();
        surface.translate(self.layout.origin());
        self.draw_curves(surface, points);
        if show_points {
            self.draw_points(surface, points);
        }
        surface.restore();

        log::trace!("frame {} drawn with {} strokes", frame, points.len());
    }

    /// Stroke one path per point, walking the grid row by row.
    ///
    /// A row opens with a bare `move_to`, every following point adds a curve
    /// from the running cursor through itself to a weighted midpoint towards
    /// its successor. The last column never curves into the next row.
    pub fn draw_curves(&self, surface: &mut impl DrawingContext, points: &[Point]) {
        surface.set_line_width(self.base_line_width);
        surface.set_stroke_color(Color32::WHITE);

        let total = points.len() as f32;
        let mut cursor = Pos2::ZERO;

        for (i, curr) in points.iter().enumerate() {
            surface.begin_path();

            if self.layout.is_row_start(i) {
                surface.move_to(curr.position);
                cursor = curr.position;
            } else if let Some(next) = points.get(i + 1) {
                let delta = next.position - curr.position;
                let mid = curr.position + delta * self.midpoint_weight;

                surface.move_to(cursor);
                if !self.layout.is_row_end(i) {
                    surface.quadratic_curve_to(curr.position, mid);
                }

                let drift = i as f32 / total * self.drift_factor;
                cursor = mid - Vec2::splat(drift);
            }

            surface.set_line_width(curr.stroke_width);
            surface.set_stroke_color(curr.color);
            surface.stroke();
        }
    }

    pub fn draw_points(&self, surface: &mut impl DrawingContext, points: &[Point]) {
        for point in points {
            surface.fill_circle(point.position, self.point_radius, point.color);
        }
    }
}

// Noise-woven grid sketches

pub mod color_ramp;
pub mod config;
pub mod grid;
pub mod math;
pub mod noise;
pub mod renderer;

pub use color_ramp::*;
pub use config::*;
pub use grid::*;
pub use self::noise::*;
pub use renderer::*;

use egui::Vec2;

use crate::surface::DrawingContext;

/// A built sketch: the grid of points plus everything needed to draw it.
///
/// The grid is built once in [`Sketch::new`]; [`Sketch::render`] is called
/// once per frame and only touches positions, and only for animated sketches.
#[derive(Debug, Clone)]
pub struct Sketch {
    config: SketchConfig,
    size: Vec2,
    noise: NoiseField,
    renderer: FrameRenderer,
    points: Vec<Point>,
}

impl Sketch {
    pub fn new(config: SketchConfig, seed: u32, width: f32, height: f32) -> Self {
        let layout = GridLayout::new(&config, width, height);
        let noise = NoiseField::new(NoiseConfig::new(seed, config.frequency, config.amplitude));
        let ramp = ColorRamp::plasma(config.shade_count);
        let points = build_grid(&config, &layout, &noise, &ramp);
        let renderer = FrameRenderer::new(&config, layout);

        log::info!(
            "Built {}x{} grid ({} points) with seed {}",
            config.n_cols,
            config.n_rows,
            points.len(),
            seed
        );
        log::debug!(
            "cell {:.2}x{:.2}, margins {:.1}/{:.1}, animated: {}",
            layout.cell_width,
            layout.cell_height,
            layout.margin_x,
            layout.margin_y,
            config.animated
        );

        Self {
            config,
            size: Vec2::new(width, height),
            noise,
            renderer,
            points,
        }
    }

    /// Build one of the built-in sketches on the standard square canvas
    pub fn for_variant(variant: SketchVariant, seed: u32) -> Self {
        Self::new(variant.config(), seed, CANVAS_SIZE, CANVAS_SIZE)
    }

    pub fn render(&mut self, surface: &mut impl DrawingContext, frame: u64, show_points: bool) {
        self.renderer.render(
            surface,
            &mut self.points,
            &self.noise,
            self.size,
            frame,
            show_points,
        );
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.noise.config().seed
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_animated(&self) -> bool {
        self.renderer.is_animated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn test_for_variant_uses_square_canvas() {
        let sketch = Sketch::for_variant(SketchVariant::Drifting, 3);
        assert_eq!(sketch.size(), Vec2::splat(CANVAS_SIZE));
        assert_eq!(sketch.points().len(), 576);
        assert_eq!(sketch.seed(), 3);
        assert!(sketch.is_animated());
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let a = Sketch::for_variant(SketchVariant::Woven, 8);
        let b = Sketch::for_variant(SketchVariant::Woven, 8);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_render_records_full_frame() {
        let mut sketch = Sketch::for_variant(SketchVariant::Woven, 8);
        let mut surface = RecordingSurface::new();
        sketch.render(&mut surface, 0, false);
        assert_eq!(surface.stroke_count(), 1000);
    }
}

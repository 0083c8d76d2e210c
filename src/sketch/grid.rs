//! Noise-perturbed point lattice
//!
//! Points are laid out row-major: index `i` sits at row `i / n_cols`,
//! column `i % n_cols`.

use egui::{vec2, Color32, Pos2, Vec2};

use super::color_ramp::ColorRamp;
use super::config::SketchConfig;
use super::math::map_range;
use super::noise::NoiseField;

/// One grid point and its stroke attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Where the point is drawn this frame
    pub position: Pos2,
    /// Position right after setup, the anchor for animation
    pub initial_position: Pos2,
    pub stroke_width: f32,
    pub color: Color32,
}

impl Point {
    pub fn new(position: Pos2, stroke_width: f32, color: Color32) -> Self {
        Self {
            position,
            initial_position: position,
            stroke_width,
            color,
        }
    }
}

/// Cell sizes and margins derived from the canvas size and the config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub n_cols: usize,
    pub n_rows: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
}

impl GridLayout {
    pub fn new(config: &SketchConfig, width: f32, height: f32) -> Self {
        debug_assert!(config.n_cols > 0 && config.n_rows > 0, "empty grid");
        debug_assert!(width > 0.0 && height > 0.0, "empty canvas");

        let grid_width = width * config.fill_fraction;
        let grid_height = height * config.fill_fraction;

        Self {
            n_cols: config.n_cols,
            n_rows: config.n_rows,
            cell_width: grid_width / config.n_cols as f32,
            cell_height: grid_height / config.n_rows as f32,
            margin_x: (width - grid_width) / 2.0,
            margin_y: (height - grid_height) / 2.0,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.n_cols * self.n_rows
    }

    /// (row, col) of a cell index
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.n_cols, index % self.n_cols)
    }

    /// Unperturbed lattice position of a cell, relative to the grid origin
    pub fn base_position(&self, index: usize) -> Pos2 {
        let (row, col) = self.cell(index);
        Pos2::new(col as f32 * self.cell_width, row as f32 * self.cell_height)
    }

    pub fn is_row_start(&self, index: usize) -> bool {
        index % self.n_cols == 0
    }

    pub fn is_row_end(&self, index: usize) -> bool {
        index % self.n_cols == self.n_cols - 1
    }

    /// Offset that centers the grid (and each cell) on the canvas
    pub fn origin(&self) -> Vec2 {
        vec2(
            self.margin_x + self.cell_width / 2.0,
            self.margin_y + self.cell_height / 2.0,
        )
    }
}

/// Build every point of the grid.
///
/// Each lattice position is pushed along the diagonal by a single noise
/// sample, and the same sample picks the stroke width and the ramp shade.
pub fn build_grid(
    config: &SketchConfig,
    layout: &GridLayout,
    noise: &NoiseField,
    ramp: &ColorRamp,
) -> Vec<Point> {
    let amplitude = noise.amplitude();
    let (min_width, max_width) = config.line_width_range;

    (0..layout.cell_count())
        .map(|i| {
            let base = layout.base_position(i);
            let n = noise.sample(base.x as f64, base.y as f64);

            let position = base + Vec2::splat(n as f32);
            let stroke_width = map_range(
                n,
                -amplitude,
                amplitude,
                min_width as f64,
                max_width as f64,
            ) as f32;
            let color_index = map_range(n, -amplitude, amplitude, 0.0, amplitude).floor() as i64;

            Point::new(position, stroke_width, ramp.get(color_index))
        })
        .collect()
}

use serde::{Deserialize, Serialize};

/// Logical canvas edge length shared by both sketches
pub const CANVAS_SIZE: f32 = 1080.0;

/// Which of the two built-in sketches to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SketchVariant {
    /// Dense 20x50 weave, positions frozen after setup
    Woven,
    /// Wide 72x8 strands re-perturbed every frame
    Drifting,
}

impl SketchVariant {
    pub const ALL: [SketchVariant; 2] = [SketchVariant::Woven, SketchVariant::Drifting];

    pub fn config(self) -> SketchConfig {
        match self {
            SketchVariant::Woven => SketchConfig::woven(),
            SketchVariant::Drifting => SketchConfig::drifting(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SketchVariant::Woven => "Woven",
            SketchVariant::Drifting => "Drifting",
        }
    }
}

/// Everything that distinguishes one sketch from another.
///
/// Both sketches share the same grid builder and renderer; the differences
/// between them live entirely in this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Points per row
    pub n_cols: usize,

    /// Number of rows
    pub n_rows: usize,

    /// Share of the canvas covered by the grid, the rest is margin
    pub fill_fraction: f32,

    /// Noise frequency applied to lattice coordinates
    pub frequency: f64,

    /// Noise amplitude; samples fall within [-amplitude, amplitude]
    pub amplitude: f64,

    /// Output range of the per-point stroke width
    pub line_width_range: (f32, f32),

    /// Weight of `next - curr` used to place the curve end point, per axis
    pub midpoint_weight: (f32, f32),

    /// Whether positions are re-sampled from noise on every frame
    pub animated: bool,

    /// Cursor offset applied after each segment, scaled by `i / N`
    pub drift_factor: f32,

    /// Horizontal noise offset per frame for animated sketches
    pub frame_step: f64,

    /// Line width set before any point overrides it
    pub base_line_width: f32,

    /// Number of shades sampled from the color scheme
    pub shade_count: usize,

    /// Dot radius for the point overlay
    pub point_radius: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::woven()
    }
}

impl SketchConfig {
    /// 20 columns by 50 rows of evenly smoothed curves that never move
    pub fn woven() -> Self {
        Self {
            n_cols: 20,
            n_rows: 50,
            fill_fraction: 0.9,
            frequency: 0.002,
            amplitude: 90.0,
            line_width_range: (2.0, 20.0),
            midpoint_weight: (0.5, 0.5),
            animated: false,
            drift_factor: 0.0,
            frame_step: 2.0,
            base_line_width: 4.0,
            shade_count: 90,
            point_radius: 15.0,
        }
    }

    /// 72 columns by 8 rows with stretched curves that drift over time
    pub fn drifting() -> Self {
        Self {
            n_cols: 72,
            n_rows: 8,
            line_width_range: (0.0, 10.0),
            midpoint_weight: (0.2, 7.0),
            animated: true,
            drift_factor: 250.0,
            ..Self::woven()
        }
    }

    pub fn cell_count(&self) -> usize {
        self.n_cols * self.n_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_woven_preset() {
        let config = SketchConfig::woven();
        assert_eq!(config.cell_count(), 1000);
        assert_eq!(config.line_width_range, (2.0, 20.0));
        assert_eq!(config.midpoint_weight, (0.5, 0.5));
        assert!(!config.animated);
        assert_eq!(config.drift_factor, 0.0);
    }

    #[test]
    fn test_drifting_preset() {
        let config = SketchConfig::drifting();
        assert_eq!(config.cell_count(), 576);
        assert_eq!(config.line_width_range, (0.0, 10.0));
        assert_eq!(config.midpoint_weight, (0.2, 7.0));
        assert!(config.animated);
        assert_eq!(config.drift_factor, 250.0);
        // Shared noise and ramp settings come from the woven preset
        assert_eq!(config.frequency, 0.002);
        assert_eq!(config.amplitude, 90.0);
        assert_eq!(config.shade_count, 90);
    }

    #[test]
    fn test_variant_configs() {
        assert_eq!(SketchVariant::Woven.config(), SketchConfig::woven());
        assert_eq!(SketchVariant::Drifting.config(), SketchConfig::drifting());
        assert_eq!(SketchConfig::default(), SketchConfig::woven());
    }
}

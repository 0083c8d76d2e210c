use noise::{NoiseFn, Simplex};
use serde::{Deserialize, Serialize};

/// Configuration for the coherent noise sampled by the sketches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Random seed for reproducible generation
    pub seed: u32,

    /// Scale applied to input coordinates (higher = busier field)
    /// Typical range: 0.001 - 0.01
    pub frequency: f64,

    /// Output scale; samples are bounded to [-amplitude, amplitude]
    pub amplitude: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frequency: 0.002,
            amplitude: 90.0,
        }
    }
}

impl NoiseConfig {
    pub fn new(seed: u32, frequency: f64, amplitude: f64) -> Self {
        Self {
            seed,
            frequency,
            amplitude,
        }
    }

    /// Same frequency and amplitude with a freshly drawn seed
    pub fn reseeded(self) -> Self {
        Self {
            seed: rand::random(),
            ..self
        }
    }
}

/// Seeded 2D simplex noise scaled by frequency and amplitude
#[derive(Clone)]
pub struct NoiseField {
    simplex: Simplex,
    config: NoiseConfig,
}

impl NoiseField {
    pub fn new(config: NoiseConfig) -> Self {
        Self {
            simplex: Simplex::new(config.seed),
            config,
        }
    }

    pub fn config(&self) -> NoiseConfig {
        self.config
    }

    pub fn amplitude(&self) -> f64 {
        self.config.amplitude
    }

    /// Sample the field at `(x, y)`.
    /// Returns a value in [-amplitude, amplitude]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let nx = x * self.config.frequency;
        let ny = y * self.config.frequency;

        // Simplex output is nominally [-1, 1]; clamp so the bound is exact
        let raw = self.simplex.get([nx, ny]).clamp(-1.0, 1.0);

        raw * self.config.amplitude
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("config", &self.config)
            .finish()
    }
}

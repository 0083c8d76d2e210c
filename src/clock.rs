use serde::{Deserialize, Serialize};

/// Default tick rate of the animation loop
pub const DEFAULT_FPS: f64 = 24.0;

/// Turns elapsed wall-clock time into an integer frame index.
///
/// The frame index only moves forward and advances by one every `1 / fps`
/// seconds of unpaused time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameClock {
    fps: f64,
    #[serde(skip)]
    elapsed: f64,
    #[serde(skip)]
    last_time: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl FrameClock {
    pub fn new(fps: f64) -> Self {
        Self {
            fps: fps.max(1.0),
            elapsed: 0.0,
            last_time: None,
        }
    }

    /// Feed the host's current time in seconds and get the frame to draw.
    ///
    /// Time that passes while `paused` is not counted, and a host clock that
    /// jumps backwards is treated as no time passing.
    pub fn tick(&mut self, now: f64, paused: bool) -> u64 {
        if let Some(last) = self.last_time {
            if !paused {
                self.elapsed += (now - last).max(0.0);
            }
        }
        self.last_time = Some(now);
        self.frame()
    }

    pub fn frame(&self) -> u64 {
        (self.elapsed * self.fps).floor() as u64
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Back to frame zero
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.last_time = None;
    }
}

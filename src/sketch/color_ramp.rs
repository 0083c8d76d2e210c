use egui::Color32;

/// A color stop in a continuous color scheme
#[derive(Clone, Debug)]
pub struct SchemeStop {
    /// Normalized position [0.0, 1.0]
    pub position: f32,
    pub color: Color32,
}

impl SchemeStop {
    pub fn new(position: f32, color: Color32) -> Self {
        Self { position, color }
    }
}

/// Continuous color scheme sampled by linear interpolation between stops
#[derive(Clone, Debug)]
pub struct ColorScheme {
    stops: Vec<SchemeStop>,
}

impl ColorScheme {
    pub fn new(mut stops: Vec<SchemeStop>) -> Self {
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    /// Perceptually uniform dark blue -> magenta -> yellow scheme
    pub fn plasma() -> Self {
        Self::new(vec![
            SchemeStop::new(0.0, Color32::from_rgb(13, 8, 135)),
            SchemeStop::new(0.13, Color32::from_rgb(75, 3, 161)),
            SchemeStop::new(0.25, Color32::from_rgb(125, 3, 168)),
            SchemeStop::new(0.38, Color32::from_rgb(168, 34, 150)),
            SchemeStop::new(0.5, Color32::from_rgb(203, 70, 121)),
            SchemeStop::new(0.63, Color32::from_rgb(229, 107, 93)),
            SchemeStop::new(0.75, Color32::from_rgb(248, 148, 65)),
            SchemeStop::new(0.88, Color32::from_rgb(253, 195, 40)),
            SchemeStop::new(1.0, Color32::from_rgb(240, 249, 33)),
        ])
    }

    pub fn sample(&self, t: f32) -> Color32 {
        let Some(first) = self.stops.first() else {
            return Color32::WHITE;
        };
        let clamped = t.clamp(0.0, 1.0);
        for window in self.stops.windows(2) {
            if clamped >= window[0].position && clamped <= window[1].position {
                let range = (window[1].position - window[0].position).max(1e-5);
                let local_t = (clamped - window[0].position) / range;
                return lerp(window[0].color, window[1].color, local_t);
            }
        }
        match self.stops.last() {
            Some(last) if clamped > first.position => last.color,
            _ => first.color,
        }
    }

    pub fn stops(&self) -> &[SchemeStop] {
        &self.stops
    }
}

fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let clamped = t.clamp(0.0, 1.0);
    let r = a.r() as f32 + (b.r() as f32 - a.r() as f32) * clamped;
    let g = a.g() as f32 + (b.g() as f32 - a.g() as f32) * clamped;
    let b = a.b() as f32 + (b.b() as f32 - a.b() as f32) * clamped;
    Color32::from_rgb(r.round() as u8, g.round() as u8, b.round() as u8)
}

/// Fixed list of opaque shades taken from a scheme at equal intervals.
///
/// Lookups past either end fall back to white instead of failing.
#[derive(Clone, Debug)]
pub struct ColorRamp {
    shades: Vec<Color32>,
}

impl ColorRamp {
    pub const FALLBACK: Color32 = Color32::WHITE;

    pub fn from_scheme(scheme: &ColorScheme, shade_count: usize) -> Self {
        let shades = match shade_count {
            0 => Vec::new(),
            1 => vec![scheme.sample(0.0)],
            n => (0..n)
                .map(|i| scheme.sample(i as f32 / (n - 1) as f32))
                .collect(),
        };
        Self { shades }
    }

    pub fn plasma(shade_count: usize) -> Self {
        Self::from_scheme(&ColorScheme::plasma(), shade_count)
    }

    /// Shade at `index`, or white when the index is outside the ramp
    pub fn get(&self, index: i64) -> Color32 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.shades.get(i).copied())
            .unwrap_or(Self::FALLBACK)
    }

    pub fn contains(&self, color: Color32) -> bool {
        self.shades.contains(&color)
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    pub fn shades(&self) -> &[Color32] {
        &self.shades
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plasma_endpoints() {
        let scheme = ColorScheme::plasma();
        assert_eq!(scheme.sample(0.0), Color32::from_rgb(13, 8, 135));
        assert_eq!(scheme.sample(1.0), Color32::from_rgb(240, 249, 33));
    }

    #[test]
    fn test_sample_clamps() {
        let scheme = ColorScheme::plasma();
        assert_eq!(scheme.sample(-0.5), scheme.sample(0.0));
        assert_eq!(scheme.sample(1.5), scheme.sample(1.0));
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        let scheme = ColorScheme::new(vec![
            SchemeStop::new(0.0, Color32::from_rgb(0, 0, 0)),
            SchemeStop::new(1.0, Color32::from_rgb(200, 100, 50)),
        ]);
        assert_eq!(scheme.sample(0.5), Color32::from_rgb(100, 50, 25));
    }

    #[test]
    fn test_unordered_stops_are_sorted() {
        let scheme = ColorScheme::new(vec![
            SchemeStop::new(1.0, Color32::WHITE),
            SchemeStop::new(0.0, Color32::BLACK),
        ]);
        assert_eq!(scheme.stops()[0].position, 0.0);
        assert_eq!(scheme.sample(0.0), Color32::BLACK);
        assert_eq!(scheme.sample(1.0), Color32::WHITE);
    }

    #[test]
    fn test_empty_scheme_is_white() {
        let scheme = ColorScheme::new(vec![]);
        assert_eq!(scheme.sample(0.3), Color32::WHITE);
    }

    #[test]
    fn test_ramp_has_requested_shades() {
        let ramp = ColorRamp::plasma(90);
        assert_eq!(ramp.len(), 90);
        assert_eq!(ramp.get(0), Color32::from_rgb(13, 8, 135));
        assert_eq!(ramp.get(89), Color32::from_rgb(240, 249, 33));
        assert!(ramp.shades().iter().all(|c| c.a() == 255));
    }

    #[test]
    fn test_ramp_out_of_range_is_white() {
        let ramp = ColorRamp::plasma(90);
        assert_eq!(ramp.get(90), Color32::WHITE);
        assert_eq!(ramp.get(-1), Color32::WHITE);
        assert_eq!(ramp.get(i64::MAX), Color32::WHITE);
    }

    #[test]
    fn test_degenerate_ramps() {
        assert!(ColorRamp::plasma(0).is_empty());
        assert_eq!(ColorRamp::plasma(0).get(0), Color32::WHITE);
        assert_eq!(ColorRamp::plasma(1).shades(), &[Color32::from_rgb(13, 8, 135)]);
    }

    #[test]
    fn test_ramp_is_smooth() {
        let ramp = ColorRamp::plasma(90);
        for pair in ramp.shades().windows(2) {
            let diff: i32 = [
                pair[0].r() as i32 - pair[1].r() as i32,
                pair[0].g() as i32 - pair[1].g() as i32,
                pair[0].b() as i32 - pair[1].b() as i32,
            ]
            .iter()
            .map(|d| d.abs())
            .sum();
            assert!(diff < 40, "Shade step too abrupt: {:?} -> {:?}", pair[0], pair[1]);
        }
    }
}

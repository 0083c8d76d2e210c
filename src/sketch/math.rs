/// Linearly remaps `value` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// No clamping is applied, values outside the input range extrapolate.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() < f64::EPSILON {
        return out_min;
    }
    lerp(out_min, out_max, (value - in_min) / span)
}

/// Linear interpolation between two values
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(-90.0, -90.0, 90.0, 2.0, 20.0), 2.0);
        assert_eq!(map_range(90.0, -90.0, 90.0, 2.0, 20.0), 20.0);
        assert_eq!(map_range(0.0, -90.0, 90.0, 0.0, 90.0), 45.0);
    }

    #[test]
    fn test_map_range_extrapolates() {
        assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
        assert_eq!(map_range(-1.0, 0.0, 1.0, 0.0, 10.0), -10.0);
    }

    #[test]
    fn test_map_range_degenerate_domain() {
        assert_eq!(map_range(5.0, 1.0, 1.0, 3.0, 7.0), 3.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(4.0, 8.0, 0.0), 4.0);
        assert_eq!(lerp(4.0, 8.0, 1.0), 8.0);
    }
}

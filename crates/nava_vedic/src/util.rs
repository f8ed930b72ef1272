//! Small angle helpers shared across the crate.

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Forward arc from `a` to `b` in degrees, always in [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_cases() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(365.0), 5.0);
        assert_eq!(normalize_360(-10.0), 350.0);
        assert_eq!(normalize_360(-370.0), 350.0);
    }

    #[test]
    fn arc_forward_wraps() {
        assert!((arc_forward(10.0, 40.0) - 30.0).abs() < 1e-12);
        assert!((arc_forward(350.0, 20.0) - 30.0).abs() < 1e-12);
        assert!((arc_forward(20.0, 350.0) - 330.0).abs() < 1e-12);
    }
}

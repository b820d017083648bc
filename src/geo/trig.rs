//! Degree-based trigonometry helpers

use std::f64::consts::PI;

#[inline]
pub fn degree_to_radian(degree: f64) -> f64 {
    PI * degree / 180.0
}

#[inline]
pub fn radian_to_degree(radian: f64) -> f64 {
    180.0 * radian / PI
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degree: f64) -> f64 {
    degree_to_radian(degree).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degree: f64) -> f64 {
    degree_to_radian(degree).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        assert!((degree_to_radian(180.0) - PI).abs() < 1e-12);
        assert!((radian_to_degree(PI / 2.0) - 90.0).abs() < 1e-12);
        assert!((radian_to_degree(degree_to_radian(-37.25)) + 37.25).abs() < 1e-12);
    }

    #[test]
    fn degree_sin_cos() {
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-12);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-12);
        assert!(sin_deg(0.0).abs() < 1e-12);
        assert!((cos_deg(360.0) - 1.0).abs() < 1e-12);
    }
}

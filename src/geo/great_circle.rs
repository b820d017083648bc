//! Great-circle distance and interpolation

use super::point::GeoPoint;
use super::trig::{cos_deg, radian_to_degree, sin_deg};
use std::f64::consts::PI;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Below this separation (radians) two points are treated as the same point.
const COINCIDENT_EPSILON: f64 = 1e-12;
/// Within this distance of PI (radians) two points are treated as antipodal.
const ANTIPODAL_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("no unique great circle between antipodal points {0} and {1}")]
    AntipodalEndpoints(GeoPoint, GeoPoint),
}

/// Angular separation of two points in radians, using the haversine formula.
pub fn central_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = b.lat - a.lat;
    let dlng = b.lng - a.lng;
    let sin_half_lat = sin_deg(dlat / 2.0);
    let sin_half_lng = sin_deg(dlng / 2.0);
    let h = sin_half_lat * sin_half_lat
        + cos_deg(a.lat) * cos_deg(b.lat) * sin_half_lng * sin_half_lng;
    // Rounding can push h a hair past 1 for near-antipodal pairs.
    let h = h.clamp(0.0, 1.0);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance between two points on a sphere of `radius`.
///
/// The result is in the same unit as `radius`.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint, radius: f64) -> f64 {
    radius * central_angle(a, b)
}

/// The point a fraction `f` of the way along the shorter great-circle arc
/// from `p1` to `p2`.
///
/// `f` is clamped to [0, 1], and a NaN `f` is treated as 0. Coincident endpoints return `p1`. Antipodal
/// endpoints have no unique shorter arc and are reported as an error unless
/// `f` selects one of the endpoints.
pub fn interpolate(p1: GeoPoint, p2: GeoPoint, f: f64) -> Result<GeoPoint, GeoError> {
    if f.is_nan() || f <= 0.0 {
        return Ok(p1);
    }
    if f >= 1.0 {
        return Ok(p2);
    }

    let delta = central_angle(p1, p2);
    if delta < COINCIDENT_EPSILON {
        return Ok(p1);
    }
    if PI - delta < ANTIPODAL_EPSILON {
        return Err(GeoError::AntipodalEndpoints(p1, p2));
    }

    let sin_delta = delta.sin();
    let a = ((1.0 - f) * delta).sin() / sin_delta;
    let b = (f * delta).sin() / sin_delta;

    let x = a * cos_deg(p1.lat) * cos_deg(p1.lng) + b * cos_deg(p2.lat) * cos_deg(p2.lng);
    let y = a * cos_deg(p1.lat) * sin_deg(p1.lng) + b * cos_deg(p2.lat) * sin_deg(p2.lng);
    let z = a * sin_deg(p1.lat) + b * sin_deg(p2.lat);

    let phi = z.atan2((x * x + y * y).sqrt());
    let lambda = y.atan2(x);

    Ok(GeoPoint::new(radian_to_degree(phi), radian_to_degree(lambda)))
}

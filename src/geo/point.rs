//! Geographic points and their position on the unit sphere

use super::trig::{cos_deg, sin_deg};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair in degrees.
///
/// Values are not range checked. Anything outside [-90, 90] / [-180, 180]
/// still projects to a well-defined point through the periodic trig functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

impl FromStr for GeoPoint {
    type Err = String;

    /// Parses `"lat,lng"`, e.g. `"51.5,-0.1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LNG but got '{s}'"))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid latitude '{}': {e}", lat.trim()))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid longitude '{}': {e}", lng.trim()))?;
        if !lat.is_finite() || !lng.is_finite() {
            return Err(format!("coordinates must be finite: '{s}'"));
        }
        Ok(Self { lat, lng })
    }
}

/// A point on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SpherePoint {
    pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[cfg(test)]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Map a latitude/longitude (degrees) onto the unit sphere.
///
/// North latitudes have negative `z`.
pub fn project(lat: f64, lng: f64) -> SpherePoint {
    SpherePoint::new(
        cos_deg(lat) * cos_deg(lng),
        cos_deg(lat) * sin_deg(lng),
        -sin_deg(lat),
    )
}

impl From<GeoPoint> for SpherePoint {
    fn from(p: GeoPoint) -> Self {
        project(p.lat, p.lng)
    }
}

//! Approximate user location from IP geolocation

use crate::geo::GeoPoint;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// ip-api.com only serves its free tier over plain HTTP.
const LOCATION_URL: &str = "http://ip-api.com/json/?fields=status,lat,lon";

#[derive(Debug, Deserialize)]
struct IpLocation {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpLocation {
    fn point(&self) -> Option<GeoPoint> {
        if self.status != "success" {
            return None;
        }
        Some(GeoPoint::new(self.lat?, self.lon?))
    }
}

/// Look up the caller's location, or `None` when the service is unreachable.
pub fn fetch_user_location() -> Option<GeoPoint> {
    let response = ureq::get(LOCATION_URL)
        .timeout(Duration::from_secs(3))
        .call()
        .map_err(|e| warn!("location lookup failed: {e}"))
        .ok()?;

    let location: IpLocation = response
        .into_json()
        .map_err(|e| warn!("location response unreadable: {e}"))
        .ok()?;

    let point = location.point();
    match point {
        Some(p) => debug!("located user at {p}"),
        None => warn!("location service returned status '{}'", location.status),
    }
    point
}

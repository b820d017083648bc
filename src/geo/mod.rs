//! Spherical geometry: degree trigonometry, projection onto the unit sphere,
//! and great-circle distance/interpolation.

pub mod great_circle;
pub mod point;
pub mod trig;

pub use great_circle::{haversine_distance, interpolate, GeoError, EARTH_RADIUS_KM};
pub use point::{project, GeoPoint, SpherePoint};
pub use trig::degree_to_radian;

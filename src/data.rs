//! Built-in boundary data and path-set loading
//!
//! Outlines are coarse: enough to recognise continents on a terminal globe.
//! Rings repeat their first point as their last, so they draw closed.

use crate::error::{Error, Result};
use crate::geo::{haversine_distance, GeoPoint, EARTH_RADIUS_KM};
use crate::path::{Path, PathSet};
use std::sync::LazyLock;
use tracing::info;

/// A named point of interest.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

fn to_path(points: &[(f64, f64)]) -> Path {
    points.iter().map(|&(lat, lng)| GeoPoint::new(lat, lng)).collect()
}

static LAND: LazyLock<PathSet> = LazyLock::new(|| {
    PathSet::new(
        "land",
        [
            NORTH_AMERICA, SOUTH_AMERICA, EUROPE, AFRICA, ASIA, AUSTRALIA, GREENLAND, JAPAN,
            UK_IRELAND, ANTARCTICA,
        ]
        .iter()
        .map(|p| to_path(p))
        .collect(),
    )
});

static COUNTRIES: LazyLock<PathSet> = LazyLock::new(|| {
    PathSet::new(
        "countries",
        [
            US_CANADA, ALASKA_CANADA, US_MEXICO, FRANCE_SPAIN, FRANCE_EAST, GERMANY_POLAND,
            CHINA_MONGOLIA, INDIA_CHINA, ARGENTINA_CHILE, EGYPT_WEST_SOUTH,
        ]
        .iter()
        .map(|p| to_path(p))
        .collect(),
    )
});

/// Continent coastlines.
pub fn land() -> &'static PathSet {
    &LAND
}

/// A handful of national borders.
pub fn countries() -> &'static PathSet {
    &COUNTRIES
}

pub fn cities() -> &'static [City] {
    CITIES
}

/// The built-in city closest to `point`, if one lies within `max_km`.
pub fn nearest_city(point: GeoPoint, max_km: f64) -> Option<&'static City> {
    CITIES
        .iter()
        .map(|city| (city, haversine_distance(point, GeoPoint::new(city.lat, city.lng), EARTH_RADIUS_KM)))
        .filter(|(_, km)| *km <= max_km)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(city, _)| city)
}

/// Load a path set from a JSON file of the form
/// `{"name": "...", "paths": [[{"lat": .., "lng": ..}, ...], ...]}`.
pub fn load_path_set(path: &std::path::Path) -> Result<PathSet> {
    let content = std::fs::read_to_string(path)?;
    let set: PathSet = serde_json::from_str(&content).map_err(|source| Error::PathSet {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        name = %set.name,
        paths = set.paths.len(),
        segments = set.segment_count(),
        "loaded path set from {}",
        path.display()
    );
    Ok(set)
}

const NORTH_AMERICA: &[(f64, f64)] = &[
    (69.5, -90.5), (67.1, -81.4), (58.9, -94.7), (51.2, -79.9), (62.6, -77.4),
    (58.2, -67.6), (60.3, -64.6), (53.3, -55.8), (46.8, -71.1), (49.2, -65.1),
    (45.9, -59.8), (39.2, -76.3), (31.4, -81.3), (25.2, -80.4), (30.1, -84.1),
    (27.8, -97.1), (18.8, -95.9), (21.5, -87.1), (15.9, -88.9), (15.3, -83.4),
    (9.0, -82.2), (11.1, -74.9), (7.2, -80.9), (19.3, -105.0), (31.2, -113.1),
    (23.4, -109.4), (24.7, -112.2), (40.3, -124.4), (49.0, -122.8), (58.1, -134.1),
    (61.3, -150.6), (54.4, -164.8), (58.9, -157.0), (61.5, -166.1), (64.8, -160.8),
    (65.7, -168.1), (71.4, -156.6), (67.4, -108.9), (67.3, -96.1), (71.9, -95.2),
    (69.5, -90.5),
];

const SOUTH_AMERICA: &[(f64, f64)] = &[
    (11.1, -74.9), (10.7, -61.9), (4.2, -51.3), (-0.1, -50.4), (-7.3, -34.7),
    (-21.9, -40.9), (-24.9, -47.6), (-34.4, -53.8), (-33.9, -58.4), (-36.9, -56.8),
    (-41.1, -65.1), (-48.1, -66.0), (-53.8, -71.0), (-52.3, -74.9), (-46.6, -75.6),
    (-42.4, -72.7), (-18.3, -70.4), (-14.6, -76.0), (-4.7, -81.4), (3.8, -77.1),
    (9.0, -79.1), (11.1, -74.9),
];

const EUROPE: &[(f64, f64)] = &[
    (31.2, 29.7), (31.2, 34.3), (36.7, 36.2), (36.7, 27.6), (39.5, 26.2),
    (41.5, 41.6), (45.2, 36.7), (47.3, 39.1), (44.4, 33.9), (46.6, 30.7),
    (41.1, 28.8), (40.3, 22.6), (36.4, 23.2), (45.6, 13.9), (40.2, 18.5),
    (37.9, 15.7), (44.4, 8.9), (36.0, -5.9), (36.9, -8.9), (43.0, -9.4),
    (43.4, -1.9), (48.7, -4.6), (53.5, 8.1), (57.1, 8.5), (54.0, 10.9),
    (54.4, 19.7), (59.2, 23.3), (60.0, 29.1), (60.7, 21.3), (65.1, 25.4),
    (65.7, 22.2), (55.4, 12.9), (59.5, 10.4), (58.6, 5.7), (62.6, 5.9),
    (69.8, 19.2), (70.5, 31.3), (69.3, 33.8), (31.2, 29.7),
];

const AFRICA: &[(f64, f64)] = &[
    (29.9, 32.4), (11.7, 42.7), (10.6, 51.0), (-4.7, 39.2), (-14.7, 40.8),
    (-19.8, 34.8), (-24.1, 35.5), (-32.8, 28.2), (-34.8, 19.6), (-18.1, 11.8),
    (-10.7, 13.7), (3.7, 9.4), (6.3, 4.3), (4.4, -8.0), (14.7, -17.6),
    (29.9, 32.4),
];

const ASIA: &[(f64, f64)] = &[
    (77.0, 107.0), (70.8, 131.3), (69.4, 178.6), (62.3, 179.2), (59.9, 163.5),
    (51.0, 156.8), (56.8, 155.9), (62.6, 164.5), (54.7, 135.1), (52.2, 141.4),
    (39.8, 127.5), (35.1, 129.1), (40.9, 121.6), (39.2, 118.0), (37.5, 122.4),
    (34.9, 119.2), (28.2, 121.7), (19.8, 105.9), (13.4, 109.3), (8.6, 105.2),
    (13.4, 100.1), (1.3, 104.2), (22.8, 91.4), (15.9, 80.3), (8.0, 77.5),
    (21.4, 72.6), (30.3, 48.9), (24.0, 51.8), (26.4, 56.4), (22.3, 59.8),
    (12.6, 43.5), (21.3, 39.1), (69.3, 33.8), (67.5, 41.1), (66.6, 33.2),
    (63.8, 37.0), (68.6, 43.5), (68.1, 68.5), (71.0, 66.7), (73.0, 69.9),
    (66.2, 72.4), (72.8, 74.7), (77.0, 107.0),
];

const AUSTRALIA: &[(f64, f64)] = &[
    (-13.8, 143.6), (-26.1, 153.1), (-37.4, 150.0), (-38.0, 140.6), (-34.4, 138.2),
    (-35.3, 136.8), (-32.9, 137.8), (-34.9, 136.0), (-31.5, 131.3), (-34.2, 115.0),
    (-21.8, 114.1), (-19.7, 120.9), (-14.2, 125.7), (-15.0, 129.6), (-11.1, 132.4),
    (-11.9, 136.5), (-15.0, 135.5), (-17.7, 140.2), (-11.0, 142.1), (-13.8, 143.6),
];

const GREENLAND: &[(f64, f64)] = &[
    (83.5, -27.1), (82.7, -20.8), (82.0, -31.4), (81.3, -12.2), (80.2, -20.0),
    (80.1, -17.7), (76.6, -21.7), (74.3, -19.4), (70.2, -26.4), (70.1, -22.3),
    (65.5, -39.8), (60.1, -43.4), (63.6, -51.6), (67.2, -54.0), (69.9, -50.9),
    (69.6, -54.7), (70.6, -51.4), (75.5, -58.6), (78.0, -73.3), (81.8, -62.7),
    (83.5, -27.1),
];

const JAPAN: &[(f64, f64)] = &[
    (37.1, 141.0), (33.5, 135.8), (33.9, 131.0), (31.4, 130.2), (33.3, 129.4),
    (38.2, 139.4), (41.2, 140.3), (37.1, 141.0),
];

const UK_IRELAND: &[(f64, f64)] = &[
    (58.6, -3.0), (51.3, 1.4), (50.0, -5.2), (54.0, -2.9), (56.8, -6.1),
    (58.6, -3.0),
];

const ANTARCTICA: &[(f64, f64)] = &[
    (-64.2, -58.6), (-68.0, -65.7), (-73.7, -60.8), (-79.2, -78.0), (-83.2, -58.2),
    (-80.3, -28.5), (-78.1, -35.3), (-70.9, -6.9), (-65.8, 54.5), (-72.3, 69.9),
    (-66.2, 88.0), (-65.3, 135.1), (-71.7, 171.2), (-80.9, 159.8), (-84.7, 180.0),
    (-90.0, 180.0), (-90.0, -180.0), (-84.1, -179.1), (-85.0, -143.1), (-76.9, -158.4),
    (-73.9, -74.9), (-64.2, -58.6),
];

const US_CANADA: &[(f64, f64)] = &[
    (49.0, -123.3), (49.0, -95.2), (48.3, -89.5), (46.5, -84.5), (45.0, -82.5),
    (43.6, -79.2), (45.0, -74.7), (45.0, -71.5), (47.4, -69.2), (45.2, -67.3),
];

const ALASKA_CANADA: &[(f64, f64)] = &[
    (69.6, -141.0), (60.3, -141.0), (59.8, -137.5), (58.9, -135.5), (56.0, -130.0),
    (54.7, -130.6),
];

const US_MEXICO: &[(f64, f64)] = &[
    (32.5, -117.1), (32.7, -114.7), (31.3, -111.0), (31.3, -108.2), (31.8, -106.5),
    (29.8, -104.5), (29.2, -103.0), (29.8, -101.4), (27.5, -99.5), (25.9, -97.2),
];

const FRANCE_SPAIN: &[(f64, f64)] = &[(43.4, -1.8), (42.7, 0.7), (42.4, 3.2)];

const FRANCE_EAST: &[(f64, f64)] = &[
    (51.1, 2.5), (49.5, 5.8), (49.0, 8.2), (47.6, 7.6), (46.2, 6.1),
    (45.9, 7.0), (44.1, 7.7), (43.8, 7.5),
];

const GERMANY_POLAND: &[(f64, f64)] = &[(54.0, 14.2), (52.8, 14.1), (51.0, 15.0)];

const CHINA_MONGOLIA: &[(f64, f64)] = &[
    (49.2, 87.8), (45.3, 90.9), (42.7, 96.4), (42.5, 105.0), (45.0, 111.9),
    (46.7, 119.9), (49.8, 117.9),
];

const INDIA_CHINA: &[(f64, f64)] = &[
    (35.5, 77.8), (32.5, 79.2), (30.3, 81.0), (28.0, 88.0), (27.9, 91.6),
    (28.2, 97.3),
];

const ARGENTINA_CHILE: &[(f64, f64)] = &[
    (-21.8, -68.2), (-27.0, -68.6), (-33.0, -70.0), (-39.0, -71.4), (-45.0, -71.7),
    (-52.0, -69.5),
];

const EGYPT_WEST_SOUTH: &[(f64, f64)] = &[(31.6, 25.2), (22.0, 25.0), (22.0, 36.9)];

const CITIES: &[City] = &[
    City { name: "New York", lat: 40.7, lng: -74.0 },
    City { name: "Los Angeles", lat: 34.1, lng: -118.2 },
    City { name: "Chicago", lat: 41.9, lng: -87.6 },
    City { name: "Houston", lat: 29.8, lng: -95.4 },
    City { name: "Phoenix", lat: 33.4, lng: -112.1 },
    City { name: "San Francisco", lat: 37.8, lng: -122.4 },
    City { name: "Seattle", lat: 47.6, lng: -122.3 },
    City { name: "Toronto", lat: 43.7, lng: -79.4 },
    City { name: "Montreal", lat: 45.5, lng: -73.6 },
    City { name: "Mexico City", lat: 19.4, lng: -99.1 },
    City { name: "Sao Paulo", lat: -23.5, lng: -46.6 },
    City { name: "Rio de Janeiro", lat: -22.9, lng: -43.2 },
    City { name: "Buenos Aires", lat: -34.6, lng: -58.4 },
    City { name: "Santiago", lat: -33.4, lng: -70.6 },
    City { name: "Lima", lat: -12.0, lng: -77.0 },
    City { name: "Bogota", lat: 4.7, lng: -74.1 },
    City { name: "London", lat: 51.5, lng: -0.1 },
    City { name: "Paris", lat: 48.9, lng: 2.3 },
    City { name: "Berlin", lat: 52.5, lng: 13.4 },
    City { name: "Rome", lat: 41.9, lng: 12.5 },
    City { name: "Madrid", lat: 40.4, lng: -3.7 },
    City { name: "Amsterdam", lat: 52.4, lng: 4.9 },
    City { name: "Oslo", lat: 59.9, lng: 10.8 },
    City { name: "Stockholm", lat: 59.3, lng: 18.1 },
    City { name: "Moscow", lat: 55.8, lng: 37.6 },
    City { name: "Prague", lat: 50.1, lng: 14.4 },
    City { name: "Vienna", lat: 48.2, lng: 16.4 },
    City { name: "Istanbul", lat: 41.0, lng: 29.0 },
    City { name: "Cairo", lat: 30.0, lng: 31.2 },
    City { name: "Cape Town", lat: -33.9, lng: 18.4 },
    City { name: "Nairobi", lat: -1.3, lng: 36.8 },
    City { name: "Lagos", lat: 6.5, lng: 3.4 },
    City { name: "Casablanca", lat: 33.6, lng: -7.6 },
    City { name: "Johannesburg", lat: -26.2, lng: 28.0 },
    City { name: "Tokyo", lat: 35.7, lng: 139.7 },
    City { name: "Shanghai", lat: 31.2, lng: 121.5 },
    City { name: "Beijing", lat: 39.9, lng: 116.4 },
    City { name: "Hong Kong", lat: 22.3, lng: 114.2 },
    City { name: "Singapore", lat: 1.4, lng: 103.8 },
    City { name: "Seoul", lat: 37.6, lng: 127.0 },
    City { name: "Bangkok", lat: 13.8, lng: 100.5 },
    City { name: "Delhi", lat: 28.6, lng: 77.2 },
    City { name: "Mumbai", lat: 19.1, lng: 72.9 },
    City { name: "Taipei", lat: 25.0, lng: 121.5 },
    City { name: "Manila", lat: 14.6, lng: 121.0 },
    City { name: "Jakarta", lat: -6.2, lng: 106.8 },
    City { name: "Dubai", lat: 25.3, lng: 55.3 },
    City { name: "Tel Aviv", lat: 32.1, lng: 34.8 },
    City { name: "Sydney", lat: -33.9, lng: 151.2 },
    City { name: "Melbourne", lat: -37.8, lng: 145.0 },
    City { name: "Auckland", lat: -36.8, lng: 174.8 },
    City { name: "Brisbane", lat: -27.5, lng: 153.0 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn land_rings_are_closed() {
        let land = land();
        assert_eq!(land.name, "land");
        assert_eq!(land.paths.len(), 10);
        for ring in &land.paths {
            assert!(ring.len() >= 4);
            assert_eq!(ring.first(), ring.last());
        }
    }

    #[test]
    fn built_in_points_are_in_range() {
        let all = land().paths.iter().chain(countries().paths.iter()).flatten();
        for p in all {
            assert!(p.lat.abs() <= 90.0 && p.lng.abs() <= 180.0, "{p}");
        }
        for city in cities() {
            assert!(city.lat.abs() <= 90.0 && city.lng.abs() <= 180.0, "{}", city.name);
        }
    }

    #[test]
    fn nearest_city_within_range() {
        let city = nearest_city(GeoPoint::new(51.0, 0.5), 500.0).unwrap();
        assert_eq!(city.name, "London");
        assert_eq!(nearest_city(GeoPoint::new(48.9, 2.3), 10.0).unwrap().name, "Paris");
        // middle of the South Pacific
        assert!(nearest_city(GeoPoint::new(-45.0, -130.0), 500.0).is_none());
    }

    #[test]
    fn country_borders_are_open_polylines() {
        let countries = countries();
        assert_eq!(countries.name, "countries");
        assert!(countries.paths.iter().all(|p| p.len() >= 3 && p.first() != p.last()));
    }

    #[test]
    fn loads_path_set_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name": "rivers", "paths": [[{{"lat": 1.0, "lng": 2.0}}, {{"lat": 3.0, "lng": 4.0}}]]}}"#
        )
        .unwrap();

        let set = load_path_set(file.path()).unwrap();
        assert_eq!(set.name, "rivers");
        assert_eq!(set.paths, vec![vec![GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)]]);
    }

    #[test]
    fn rejects_malformed_path_set() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "rivers", "paths": [[{{"lat": "north"}}]]}}"#).unwrap();
        assert!(matches!(load_path_set(file.path()), Err(Error::PathSet { .. })));

        let missing = std::path::Path::new("/nonexistent/termglobe/paths.json");
        assert!(matches!(load_path_set(missing), Err(Error::Io(_))));
    }
}

//! Segment generators for graticule lines, boundary paths and geodesic arcs
//!
//! Every generator is a finite iterator. Stepped loops use an integer counter
//! (`start + i * step`) with a strict upper bound, so a parallel or meridian is
//! an open arc: the closing segment back to the start is never produced.

use crate::error::{Error, Result};
use crate::geo::{haversine_distance, interpolate, project, GeoPoint, SpherePoint, EARTH_RADIUS_KM};
use serde::{Deserialize, Serialize};

/// Angular resolution of graticule lines, in degrees.
pub const GRATICULE_STEP: f64 = 1.0;

/// Spacing between interpolated points on a geodesic arc, in kilometres.
pub const ARC_SPACING_KM: f64 = 500.0;

/// A line segment between two points on the unit sphere.
pub type Segment = (SpherePoint, SpherePoint);

/// An ordered polyline. Point order is the traversal direction.
pub type Path = Vec<GeoPoint>;

/// A named collection of polylines, e.g. "land" or "countries".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSet {
    pub name: String,
    pub paths: Vec<Path>,
}

impl PathSet {
    pub fn new(name: impl Into<String>, paths: Vec<Path>) -> Self {
        Self {
            name: name.into(),
            paths,
        }
    }

    /// Number of line segments the set produces.
    pub fn segment_count(&self) -> usize {
        self.paths.iter().map(|p| p.len().saturating_sub(1)).sum()
    }
}

/// A finite angular step of at least [`Step::MIN_DEGREES`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step(f64);

impl Step {
    pub const GRATICULE: Step = Step(GRATICULE_STEP);

    /// Finer steps would mean millions of segments per line.
    pub const MIN_DEGREES: f64 = 0.01;

    pub fn new(degrees: f64) -> Result<Self> {
        if degrees.is_finite() && degrees >= Self::MIN_DEGREES {
            Ok(Self(degrees))
        } else {
            Err(Error::InvalidStep(degrees))
        }
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::GRATICULE
    }
}

/// `start, start + step, ...` strictly below `end`.
fn stepped(start: f64, end: f64, step: Step) -> impl Iterator<Item = f64> {
    (0u64..)
        .map(move |i| start + i as f64 * step.0)
        .take_while(move |v| *v < end)
}

/// Segments of the parallel at `lat`, west to east from -180°.
pub fn parallel(lat: f64, step: Step) -> impl Iterator<Item = Segment> {
    stepped(-180.0, 180.0, step)
        .map(move |lng| (project(lat, lng), project(lat, lng + step.0)))
}

/// Segments of the meridian at `lng`, south to north from -90°.
pub fn meridian(lng: f64, step: Step) -> impl Iterator<Item = Segment> {
    stepped(-90.0, 90.0, step)
        .map(move |lat| (project(lat, lng), project(lat + step.0, lng)))
}

/// Latitudes of the parallels in a graticule: the equator once, then each
/// multiple of `interval` below 90° as a north/south pair.
pub fn parallel_latitudes(interval: Step) -> impl Iterator<Item = f64> {
    std::iter::once(0.0).chain(
        (1u64..)
            .map(move |k| k as f64 * interval.0)
            .take_while(|lat| *lat < 90.0)
            .flat_map(|lat| [lat, -lat]),
    )
}

/// Longitudes of the meridians in a graticule, from -180° in `interval` steps.
pub fn meridian_longitudes(interval: Step) -> impl Iterator<Item = f64> {
    stepped(-180.0, 180.0, interval)
}

/// Segments joining consecutive points of every path in the set.
///
/// Paths are independent: nothing joins the end of one path to the start of
/// the next, and no path is closed implicitly.
pub fn path_segments(set: &PathSet) -> impl Iterator<Item = Segment> + '_ {
    set.paths.iter().flat_map(|path| {
        path.windows(2)
            .map(|pair| (SpherePoint::from(pair[0]), SpherePoint::from(pair[1])))
    })
}

/// Segments approximating the shorter great-circle arc from `from` to `to`,
/// with interpolated points roughly `spacing_km` apart on the Earth.
pub fn great_circle(from: GeoPoint, to: GeoPoint, spacing_km: f64) -> Result<Vec<Segment>> {
    let distance = haversine_distance(from, to, EARTH_RADIUS_KM);
    let count = if spacing_km.is_finite() && spacing_km > 0.0 {
        ((distance / spacing_km).ceil() as usize).max(1)
    } else {
        1
    };

    let points = (0..=count)
        .map(|i| interpolate(from, to, i as f64 / count as f64).map(SpherePoint::from))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(points.windows(2).map(|pair| (pair[0], pair[1])).collect())
}

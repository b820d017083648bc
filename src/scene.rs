//! What a front end asks the globe to draw

use crate::backend::Backend;
use crate::data;
use crate::error::Result;
use crate::geo::GeoPoint;
use crate::globe::Globe;
use crate::path::PathSet;

/// Radius of user-supplied dots, in globe radii.
pub const DOT_RADIUS: f64 = 0.015;
/// Radius of city markers, in globe radii.
pub const CITY_RADIUS: f64 = 0.008;

#[derive(Debug, Clone)]
pub struct Scene {
    pub center: GeoPoint,
    /// Graticule spacing in degrees; `None` leaves the graticule out.
    pub graticule: Option<f64>,
    pub land: bool,
    pub countries: bool,
    pub cities: bool,
    pub path_sets: Vec<PathSet>,
    pub dots: Vec<GeoPoint>,
    pub arcs: Vec<(GeoPoint, GeoPoint)>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(0.0, 0.0),
            graticule: Some(15.0),
            land: true,
            countries: false,
            cities: false,
            path_sets: Vec::new(),
            dots: Vec::new(),
            arcs: Vec::new(),
        }
    }
}

impl Scene {
    /// Emit every shape, back to front, then center the view.
    pub fn draw<B: Backend>(&self, globe: &mut Globe<B>) -> Result<()> {
        if let Some(interval) = self.graticule {
            globe.draw_graticule(interval, None)?;
        }
        if self.land {
            globe.draw_land_boundaries(None);
        }
        if self.countries {
            globe.draw_country_boundaries(None);
        }
        for set in &self.path_sets {
            globe.draw_paths(set, None);
        }
        for &(from, to) in &self.arcs {
            globe.draw_great_circle(from, to, None)?;
        }
        if self.cities {
            for city in data::cities() {
                globe.draw_dot(city.lat, city.lng, CITY_RADIUS, None);
            }
        }
        for dot in &self.dots {
            globe.draw_dot(dot.lat, dot.lng, DOT_RADIUS, None);
        }
        globe.center_on(self.center.lat, self.center.lng);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::recorder::{Call, Recorder};
    use crate::style::Style;

    fn draw(scene: &Scene) -> Recorder {
        let mut globe = Globe::with_backend(Recorder::default(), Style::default());
        scene.draw(&mut globe).unwrap();
        globe.into_backend()
    }

    #[test]
    fn default_scene_is_graticule_land_and_centering() {
        let recorder = draw(&Scene::default());
        // 11 parallels + 24 meridians + land
        assert_eq!(recorder.groups().len(), 11 + 24 + 1);
        let rotations = recorder.calls.iter().filter(|c| matches!(c, Call::Rotate(..))).count();
        assert_eq!(rotations, 2);
        assert!(matches!(recorder.calls.last(), Some(Call::Rotate(..))));
    }

    #[test]
    fn dots_come_last_so_they_paint_over_lines() {
        let scene = Scene {
            graticule: None,
            land: false,
            cities: true,
            dots: vec![GeoPoint::new(10.0, 20.0)],
            ..Scene::default()
        };
        let recorder = draw(&scene);
        let groups = recorder.groups();
        assert_eq!(groups.len(), data::cities().len() + 1);
        assert_eq!(groups.last().unwrap()[0], Call::Dot(crate::geo::project(10.0, 20.0), DOT_RADIUS));
    }

    #[test]
    fn antipodal_arc_fails_the_scene() {
        let scene = Scene {
            arcs: vec![(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0))],
            ..Scene::default()
        };
        let mut globe = Globe::with_backend(Recorder::default(), Style::default());
        assert!(scene.draw(&mut globe).is_err());
    }
}

//! Globe drawing: graticules, boundaries, dots and arcs emitted as drawing
//! groups to a rendering backend

use crate::backend::{Backend, DrawingGroup, Pinhole};
use crate::canvas::Canvas;
use crate::data;
use crate::error::Result;
use crate::geo::{degree_to_radian, project, GeoPoint};
use crate::path::{self, PathSet, Step, ARC_SPACING_KM};
use crate::style::{Rgb, Style};
use std::f64::consts::FRAC_PI_2;

pub struct Globe<B: Backend = Pinhole> {
    backend: B,
    style: Style,
    step: Step,
}

impl Default for Globe<Pinhole> {
    fn default() -> Self {
        Self::new()
    }
}

impl Globe<Pinhole> {
    /// A globe on a fresh pinhole backend with the default style.
    pub fn new() -> Self {
        Self::with_backend(Pinhole::new(), Style::default())
    }

    pub fn with_style(style: Style) -> Self {
        Self::with_backend(Pinhole::new(), style)
    }

    /// Forget every drawn shape and the view rotation, keeping style and step.
    pub fn clear(&mut self) {
        self.backend.reset();
    }

    /// Paint everything drawn so far onto `canvas` using this globe's style.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.backend.render(canvas, &self.style);
    }
}

impl<B: Backend> Globe<B> {
    pub fn with_backend(backend: B, style: Style) -> Self {
        Self {
            backend,
            style,
            step: Step::GRATICULE,
        }
    }

    /// Angular resolution used for parallels and meridians.
    pub fn with_step(mut self, step: Step) -> Self {
        self.step = step;
        self
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    #[cfg(test)]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Rotate the view so (lat, lng) faces the camera.
    ///
    /// Two rotations, in this order: about the vertical axis, then about the
    /// horizontal axis.
    pub fn center_on(&mut self, lat: f64, lng: f64) {
        self.backend.rotate(0.0, 0.0, -degree_to_radian(lng) - FRAC_PI_2);
        self.backend.rotate(FRAC_PI_2 - degree_to_radian(lat), 0.0, 0.0);
    }

    pub fn draw_parallel(&mut self, lat: f64, color: Option<Rgb>) {
        let color = color.unwrap_or(self.style.graticule_color);
        let mut group = DrawingGroup::begin(&mut self.backend);
        for (a, b) in path::parallel(lat, self.step) {
            group.line(a, b);
        }
        group.finish(color);
    }

    /// The equator, then a north/south pair of parallels at every multiple of
    /// `interval` below 90°. The equator always takes the graticule color.
    pub fn draw_parallels(&mut self, interval: f64, color: Option<Rgb>) -> Result<()> {
        let interval = Step::new(interval)?;
        for lat in path::parallel_latitudes(interval) {
            let color = if lat == 0.0 { None } else { color };
            self.draw_parallel(lat, color);
        }
        Ok(())
    }

    pub fn draw_meridian(&mut self, lng: f64, color: Option<Rgb>) {
        let color = color.unwrap_or(self.style.graticule_color);
        let mut group = DrawingGroup::begin(&mut self.backend);
        for (a, b) in path::meridian(lng, self.step) {
            group.line(a, b);
        }
        group.finish(color);
    }

    pub fn draw_meridians(&mut self, interval: f64, color: Option<Rgb>) -> Result<()> {
        let interval = Step::new(interval)?;
        for lng in path::meridian_longitudes(interval) {
            self.draw_meridian(lng, color);
        }
        Ok(())
    }

    pub fn draw_graticule(&mut self, interval: f64, color: Option<Rgb>) -> Result<()> {
        self.draw_parallels(interval, color)?;
        self.draw_meridians(interval, color)
    }

    /// A dot of `radius` (in globe radii) at (lat, lng).
    pub fn draw_dot(&mut self, lat: f64, lng: f64, radius: f64, color: Option<Rgb>) {
        let color = color.unwrap_or(self.style.dot_color);
        let mut group = DrawingGroup::begin(&mut self.backend);
        group.dot(project(lat, lng), radius);
        group.finish(color);
    }

    /// Every path of the set, as one drawing group.
    pub fn draw_paths(&mut self, set: &PathSet, color: Option<Rgb>) {
        let color = color.unwrap_or(self.style.line_color);
        let mut group = DrawingGroup::begin(&mut self.backend);
        for (a, b) in path::path_segments(set) {
            group.line(a, b);
        }
        group.finish(color);
    }

    pub fn draw_land_boundaries(&mut self, color: Option<Rgb>) {
        self.draw_paths(data::land(), color);
    }

    pub fn draw_country_boundaries(&mut self, color: Option<Rgb>) {
        self.draw_paths(data::countries(), color);
    }

    /// The shorter great-circle arc between two points.
    ///
    /// Nothing is emitted when the arc is undefined (antipodal endpoints).
    pub fn draw_great_circle(&mut self, from: GeoPoint, to: GeoPoint, color: Option<Rgb>) -> Result<()> {
        let segments = path::great_circle(from, to, ARC_SPACING_KM)?;
        let color = color.unwrap_or(self.style.line_color);
        let mut group = DrawingGroup::begin(&mut self.backend);
        for (a, b) in segments {
            group.line(a, b);
        }
        group.finish(color);
        Ok(())
    }
}

//! Pinhole camera backend
//!
//! Records drawing groups, keeps a persistent view rotation and paints the
//! recorded primitives through a perspective camera onto a [`Canvas`].

use super::Backend;
use crate::canvas::{self, Canvas};
use crate::geo::SpherePoint;
use crate::style::{Rgb, Style};
use tracing::{debug, warn};

/// Distance from the camera to the globe center, in globe radii.
const CAMERA_DISTANCE: f64 = 4.0;

/// Points with view-space z above this face away from the camera.
const BACK_FACE_Z: f64 = 1e-9;

type Mat3 = [[f64; 3]; 3];

const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

fn mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (row, out_row) in out.iter_mut().enumerate() {
        for (col, cell) in out_row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[row][k] * b[k][col]).sum();
        }
    }
    out
}

fn rotate_x(angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]
}

fn rotate_y(angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]]
}

fn rotate_z(angle: f64) -> Mat3 {
    let (s, c) = angle.sin_cos();
    [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]
}

#[derive(Debug, Clone, Copy)]
enum Primitive {
    Line(SpherePoint, SpherePoint),
    Dot(SpherePoint, f64),
}

#[derive(Debug, Default)]
struct Group {
    primitives: Vec<Primitive>,
    color: Option<Rgb>,
}

/// Maps view-space points to canvas pixels.
struct Camera {
    cx: f64,
    cy: f64,
    radius: f64,
}

impl Camera {
    fn perspective(z: f64) -> f64 {
        CAMERA_DISTANCE / (CAMERA_DISTANCE + z)
    }

    fn screen(&self, p: SpherePoint) -> (f64, f64) {
        let k = Self::perspective(p.z);
        (self.cx + p.x * k * self.radius, self.cy - p.y * k * self.radius)
    }
}

#[derive(Debug)]
pub struct Pinhole {
    view: Mat3,
    groups: Vec<Group>,
    open: bool,
}

impl Default for Pinhole {
    fn default() -> Self {
        Self::new()
    }
}

impl Pinhole {
    pub fn new() -> Self {
        Self {
            view: IDENTITY,
            groups: Vec::new(),
            open: false,
        }
    }

    /// Number of recorded groups, including any still open.
    #[cfg(test)]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of recorded lines and dots.
    pub fn primitive_count(&self) -> usize {
        self.groups.iter().map(|g| g.primitives.len()).sum()
    }

    /// Drop every recorded group and return the view to identity.
    pub fn reset(&mut self) {
        self.view = IDENTITY;
        self.groups.clear();
        self.open = false;
    }

    /// Apply the view rotation to a point.
    pub fn transform(&self, p: SpherePoint) -> SpherePoint {
        let m = &self.view;
        SpherePoint::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z,
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z,
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z,
        )
    }

    fn current(&mut self) -> &mut Group {
        if !self.open || self.groups.is_empty() {
            // Primitives outside begin/end get a group of their own.
            self.groups.push(Group::default());
            self.open = false;
        }
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Paint every recorded group onto `canvas`, in emission order.
    ///
    /// The camera looks along +z, so the hemisphere with `z > 0` after the
    /// view rotation faces away and is not drawn.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, style: &Style) {
        canvas.clear(style.background_color);

        let (w, h) = canvas.size();
        let camera = Camera {
            cx: w as f64 / 2.0,
            cy: h as f64 / 2.0,
            radius: w.min(h) as f64 / 2.0 * style.scale,
        };
        let thickness = (style.line_width * camera.radius / 50.0).round().max(1.0) as u32;

        let mut painted = 0usize;
        for group in &self.groups {
            let color = group.color.unwrap_or(style.line_color);
            for primitive in &group.primitives {
                match *primitive {
                    Primitive::Line(a, b) => {
                        let (a, b) = (self.transform(a), self.transform(b));
                        if a.z > BACK_FACE_Z && b.z > BACK_FACE_Z {
                            continue;
                        }
                        canvas::line(canvas, camera.screen(a), camera.screen(b), thickness, color);
                    }
                    Primitive::Dot(center, radius) => {
                        let center = self.transform(center);
                        if center.z > BACK_FACE_Z {
                            continue;
                        }
                        let px = radius * camera.radius * Camera::perspective(center.z);
                        canvas::disc(canvas, camera.screen(center), px, color);
                    }
                }
                painted += 1;
            }
        }

        debug!(
            groups = self.groups.len(),
            primitives = self.primitive_count(),
            painted,
            width = w,
            height = h,
            "rendered globe"
        );
    }
}

impl Backend for Pinhole {
    fn begin_group(&mut self) {
        self.groups.push(Group::default());
        self.open = true;
    }

    fn end_group(&mut self) {
        self.open = false;
    }

    fn draw_line(&mut self, from: SpherePoint, to: SpherePoint) {
        self.current().primitives.push(Primitive::Line(from, to));
    }

    fn draw_dot(&mut self, center: SpherePoint, radius: f64) {
        self.current().primitives.push(Primitive::Dot(center, radius));
    }

    fn colorize(&mut self, color: Rgb) {
        match self.groups.last_mut() {
            Some(group) if self.open => group.color = Some(color),
            _ => warn!(%color, "colorize outside a drawing group ignored"),
        }
    }

    /// Later rotations apply on top of earlier ones.
    fn rotate(&mut self, ax: f64, ay: f64, az: f64) {
        let r = mul(&rotate_z(az), &mul(&rotate_y(ay), &rotate_x(ax)));
        self.view = mul(&r, &self.view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::Grid;
    use crate::geo::project;
    use std::f64::consts::FRAC_PI_2;

    fn assert_point(p: SpherePoint, x: f64, y: f64, z: f64) {
        assert!(
            (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9 && (p.z - z).abs() < 1e-9,
            "expected ({x}, {y}, {z}), got {p:?}"
        );
    }

    fn centered_on_origin() -> Pinhole {
        let mut pinhole = Pinhole::new();
        pinhole.rotate(0.0, 0.0, -FRAC_PI_2);
        pinhole.rotate(FRAC_PI_2, 0.0, 0.0);
        pinhole
    }

    #[test]
    fn view_starts_as_identity() {
        let pinhole = Pinhole::new();
        assert_point(pinhole.transform(project(0.0, 0.0)), 1.0, 0.0, 0.0);
    }

    #[test]
    fn centering_rotations_face_the_camera() {
        let pinhole = centered_on_origin();
        assert_point(pinhole.transform(project(0.0, 0.0)), 0.0, 0.0, -1.0);
        assert_point(pinhole.transform(project(0.0, 90.0)), 1.0, 0.0, 0.0);
        assert_point(pinhole.transform(project(90.0, 0.0)), 0.0, 1.0, 0.0);
        assert_point(pinhole.transform(project(0.0, 180.0)), 0.0, 0.0, 1.0);
    }

    #[test]
    fn rotation_order_matters() {
        let mut reversed = Pinhole::new();
        reversed.rotate(FRAC_PI_2, 0.0, 0.0);
        reversed.rotate(0.0, 0.0, -FRAC_PI_2);
        let p = reversed.transform(project(0.0, 0.0));
        assert!((p.z + 1.0).abs() > 1e-6);
    }

    #[test]
    fn records_groups_in_order() {
        let mut pinhole = Pinhole::new();
        pinhole.begin_group();
        pinhole.draw_line(project(0.0, 0.0), project(0.0, 1.0));
        pinhole.draw_dot(project(1.0, 1.0), 0.1);
        pinhole.colorize(Rgb::new(0, 0, 255));
        pinhole.end_group();
        pinhole.draw_line(project(5.0, 5.0), project(6.0, 6.0));
        pinhole.colorize(Rgb::new(255, 0, 0));

        assert_eq!(pinhole.group_count(), 2);
        assert_eq!(pinhole.primitive_count(), 3);
        assert_eq!(pinhole.groups[0].color, Some(Rgb::new(0, 0, 255)));
        assert_eq!(pinhole.groups[1].color, None);

        pinhole.rotate(0.3, 0.0, 0.0);
        pinhole.reset();
        assert_eq!(pinhole.group_count(), 0);
        assert_point(pinhole.transform(project(0.0, 0.0)), 1.0, 0.0, 0.0);
    }

    #[test]
    fn renders_front_dot_and_culls_back_dot() {
        let mut pinhole = centered_on_origin();
        let front = Rgb::new(255, 0, 0);
        let back = Rgb::new(0, 0, 255);
        for (lng, color) in [(0.0, front), (180.0, back)] {
            pinhole.begin_group();
            pinhole.draw_dot(project(0.0, lng), 0.05);
            pinhole.colorize(color);
            pinhole.end_group();
        }

        let mut grid = Grid::new(100, 100);
        let style = Style::default();
        pinhole.render(&mut grid, &style);

        assert_eq!(grid.get(50, 50), Some(front));
        assert_eq!(grid.painted(back), 0);
        assert_eq!(grid.get(0, 0), Some(style.background_color));
    }

    #[test]
    fn uncolored_groups_use_line_color() {
        let mut pinhole = centered_on_origin();
        pinhole.begin_group();
        pinhole.draw_line(project(0.0, -10.0), project(0.0, 10.0));
        pinhole.end_group();

        let mut grid = Grid::new(100, 100);
        let style = Style::default();
        pinhole.render(&mut grid, &style);
        assert_eq!(grid.get(50, 50), Some(style.line_color));
    }

    #[test]
    fn limb_lands_on_the_scaled_radius() {
        let mut pinhole = centered_on_origin();
        pinhole.begin_group();
        pinhole.draw_dot(project(0.0, 90.0), 0.0);
        pinhole.end_group();

        let mut grid = Grid::new(200, 100);
        let style = Style { scale: 0.5, ..Style::default() };
        pinhole.render(&mut grid, &style);
        // radius = 100 / 2 * 0.5 = 25 pixels east of center
        assert_eq!(grid.get(125, 50), Some(style.line_color));
    }

    #[test]
    fn oversized_scale_renders_without_overflow() {
        let mut pinhole = centered_on_origin();
        pinhole.begin_group();
        pinhole.draw_line(project(0.0, -60.0), project(0.0, 60.0));
        pinhole.draw_dot(project(0.0, 0.0), 0.05);
        pinhole.end_group();

        let mut grid = Grid::new(10, 10);
        let style = Style { scale: 1e10, ..Style::default() };
        pinhole.render(&mut grid, &style);
        assert_eq!(grid.get(5, 5), Some(style.line_color));
    }
}

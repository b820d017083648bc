//! Rendering backend contract
//!
//! The globe emits primitives into a [`Backend`] in drawing groups. A group is
//! opened with `begin_group`, receives lines and dots, is assigned one color
//! and is closed with `end_group`. [`DrawingGroup`] enforces that protocol.

pub mod pinhole;

pub use pinhole::Pinhole;

use crate::geo::SpherePoint;
use crate::style::Rgb;

/// A 2.5D renderer that accepts unit-sphere primitives.
pub trait Backend {
    fn begin_group(&mut self);
    fn end_group(&mut self);
    fn draw_line(&mut self, from: SpherePoint, to: SpherePoint);
    fn draw_dot(&mut self, center: SpherePoint, radius: f64);
    /// Color every primitive emitted since the last `begin_group`.
    fn colorize(&mut self, color: Rgb);
    /// Rotate the persistent view about the x, y and z axes (radians).
    fn rotate(&mut self, ax: f64, ay: f64, az: f64);
}

/// An open drawing group.
///
/// The group is begun on creation and ended when the guard drops, on every
/// exit path. [`DrawingGroup::finish`] consumes the guard, so a group can be
/// colored at most once and only before it is ended.
pub struct DrawingGroup<'a, B: Backend + ?Sized> {
    backend: &'a mut B,
}

impl<'a, B: Backend + ?Sized> DrawingGroup<'a, B> {
    pub fn begin(backend: &'a mut B) -> Self {
        backend.begin_group();
        Self { backend }
    }

    pub fn line(&mut self, from: SpherePoint, to: SpherePoint) {
        self.backend.draw_line(from, to);
    }

    pub fn dot(&mut self, center: SpherePoint, radius: f64) {
        self.backend.draw_dot(center, radius);
    }

    /// Color the group and close it.
    pub fn finish(self, color: Rgb) {
        self.backend.colorize(color);
    }
}

impl<B: Backend + ?Sized> Drop for DrawingGroup<'_, B> {
    fn drop(&mut self) {
        self.backend.end_group();
    }
}

#[cfg(test)]
pub(crate) mod recorder {
    use super::Backend;
    use crate::geo::SpherePoint;
    use crate::style::Rgb;

    /// A backend call, as seen by the recorder.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Begin,
        End,
        Line(SpherePoint, SpherePoint),
        Dot(SpherePoint, f64),
        Colorize(Rgb),
        Rotate(f64, f64, f64),
    }

    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
    }

    impl Recorder {
        pub fn lines(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Line(..))).count()
        }

        pub fn colors(&self) -> Vec<Rgb> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Colorize(color) => Some(*color),
                    _ => None,
                })
                .collect()
        }

        /// Calls split into begin/end groups; panics on unbalanced brackets.
        pub fn groups(&self) -> Vec<Vec<Call>> {
            let mut groups = Vec::new();
            let mut current: Option<Vec<Call>> = None;
            for call in &self.calls {
                match call {
                    Call::Begin => {
                        assert!(current.is_none(), "nested begin_group");
                        current = Some(Vec::new());
                    }
                    Call::End => {
                        groups.push(current.take().expect("end_group without begin_group"));
                    }
                    Call::Rotate(..) => assert!(current.is_none(), "rotation inside a group"),
                    other => current
                        .as_mut()
                        .expect("primitive outside a group")
                        .push(other.clone()),
                }
            }
            assert!(current.is_none(), "unterminated group");
            groups
        }
    }

    impl Backend for Recorder {
        fn begin_group(&mut self) {
            self.calls.push(Call::Begin);
        }

        fn end_group(&mut self) {
            self.calls.push(Call::End);
        }

        fn draw_line(&mut self, from: SpherePoint, to: SpherePoint) {
            self.calls.push(Call::Line(from, to));
        }

        fn draw_dot(&mut self, center: SpherePoint, radius: f64) {
            self.calls.push(Call::Dot(center, radius));
        }

        fn colorize(&mut self, color: Rgb) {
            self.calls.push(Call::Colorize(color));
        }

        fn rotate(&mut self, ax: f64, ay: f64, az: f64) {
            self.calls.push(Call::Rotate(ax, ay, az));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recorder::{Call, Recorder};
    use super::*;
    use crate::geo::project;

    #[test]
    fn group_is_bracketed_and_colored_once() {
        let mut backend = Recorder::default();
        let red = Rgb::new(255, 0, 0);
        {
            let mut group = DrawingGroup::begin(&mut backend);
            group.line(project(0.0, 0.0), project(0.0, 1.0));
            group.dot(project(10.0, 10.0), 0.02);
            group.finish(red);
        }
        assert_eq!(backend.calls.first(), Some(&Call::Begin));
        assert_eq!(backend.calls[3], Call::Colorize(red));
        assert_eq!(backend.calls.last(), Some(&Call::End));
        assert_eq!(backend.calls.len(), 5);
    }

    #[test]
    fn group_is_closed_on_early_exit() {
        fn draw(backend: &mut Recorder, stop_early: bool) -> Result<(), String> {
            let mut group = DrawingGroup::begin(backend);
            group.line(project(0.0, 0.0), project(1.0, 0.0));
            if stop_early {
                return Err("stopped".to_string());
            }
            group.finish(Rgb::new(0, 0, 0));
            Ok(())
        }

        let mut backend = Recorder::default();
        assert!(draw(&mut backend, true).is_err());
        assert_eq!(backend.calls.last(), Some(&Call::End));
        assert!(backend.colors().is_empty());
        assert_eq!(backend.groups().len(), 1);
    }
}

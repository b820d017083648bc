//! Interactive spinning globe in the terminal

use crate::canvas::BrailleCanvas;
use crate::data;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::globe::Globe;
use crate::help::render_help_overlay;
use crate::path::Step;
use crate::scene::Scene;
use crate::style::Style;
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::style::Color;
use std::time::Instant;
use tracing::debug;

const HELP: &str = "\
GLOBE
─────────────────
←/→ h/l  Pan longitude
↑/↓ k/j  Pan latitude
+/-      Zoom
0        Reset zoom
s        Toggle spin
Space    Pause
?        Toggle help
q/Esc    Quit";

const PAN_DEGREES: f64 = 5.0;
const ZOOM_FACTOR: f64 = 1.2;
const ZOOM_RANGE: (f64, f64) = (0.3, 3.0);
/// Slowest allowed frame, in seconds.
const MAX_FRAME_TIME: f32 = 10.0;
/// The status line names a city only this close to the center.
const NEARBY_KM: f64 = 500.0;

/// Live view options that do not belong to the scene itself.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    /// Seconds per frame.
    pub frame_time: f32,
    /// Degrees of longitude added each frame.
    pub spin: f64,
}

impl ViewOptions {
    /// Reject frame times and spin rates the loop cannot use.
    pub fn validate(&self) -> Result<()> {
        if !(self.frame_time > 0.0 && self.frame_time <= MAX_FRAME_TIME) {
            return Err(Error::Args(format!(
                "frame time must be between 0 and {MAX_FRAME_TIME} seconds, got {}",
                self.frame_time
            )));
        }
        if !self.spin.is_finite() {
            return Err(Error::Args(format!("spin must be a finite number of degrees, got {}", self.spin)));
        }
        Ok(())
    }
}

/// Camera and playback state driven by the keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
    pub spin: f64,
    pub spinning: bool,
    pub paused: bool,
    pub show_help: bool,
}

impl ViewState {
    pub fn new(lat: f64, lng: f64, spin: f64) -> Self {
        Self {
            lat,
            lng: wrap_longitude(lng),
            zoom: 1.0,
            spin,
            spinning: spin != 0.0,
            paused: false,
            show_help: false,
        }
    }

    /// Handle keypress, returns true if should quit
    pub fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Char('s') => self.spinning = !self.spinning,
            KeyCode::Left | KeyCode::Char('h') => self.pan(0.0, -PAN_DEGREES),
            KeyCode::Right | KeyCode::Char('l') => self.pan(0.0, PAN_DEGREES),
            KeyCode::Up | KeyCode::Char('k') => self.pan(PAN_DEGREES, 0.0),
            KeyCode::Down | KeyCode::Char('j') => self.pan(-PAN_DEGREES, 0.0),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.zoom = (self.zoom * ZOOM_FACTOR).min(ZOOM_RANGE.1);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.zoom = (self.zoom / ZOOM_FACTOR).max(ZOOM_RANGE.0);
            }
            KeyCode::Char('0') => self.zoom = 1.0,
            _ => {}
        }
        false
    }

    fn pan(&mut self, dlat: f64, dlng: f64) {
        self.lat = (self.lat + dlat).clamp(-90.0, 90.0);
        self.lng = wrap_longitude(self.lng + dlng);
    }

    /// Advance one frame of auto-spin.
    pub fn tick(&mut self) {
        if self.spinning && !self.paused {
            self.lng = wrap_longitude(self.lng + self.spin);
        }
    }

    fn status(&self) -> String {
        let mut status = format!("{:+.1}°, {:+.1}°  zoom {:.1}x", self.lat, self.lng, self.zoom);
        if let Some(city) = data::nearest_city(GeoPoint::new(self.lat, self.lng), NEARBY_KM) {
            status.push_str(&format!("  near {}", city.name));
        }
        if self.paused {
            status.push_str("  [paused]");
        }
        status
    }
}

/// Keep longitudes in [-180, 180).
fn wrap_longitude(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Run the frame loop until the user quits or `duration` elapses.
pub fn run(
    term: &mut Terminal,
    mut scene: Scene,
    style: &Style,
    step: Step,
    options: ViewOptions,
    duration: Option<f32>,
) -> Result<()> {
    options.validate()?;
    let mut globe = Globe::with_style(style.clone()).with_step(step);
    let mut state = ViewState::new(scene.center.lat, scene.center.lng, options.spin);
    let started = Instant::now();
    let (mut prev_w, mut prev_h) = term.size();
    let mut frames: u64 = 0;

    loop {
        if duration.is_some_and(|limit| started.elapsed().as_secs_f32() >= limit) {
            break;
        }

        let (width, height) = crossterm::terminal::size().unwrap_or(term.size());
        if width != prev_w || height != prev_h {
            term.resize(width, height);
            term.clear_screen()?;
            prev_w = width;
            prev_h = height;
        }

        if let Some((code, mods)) = term.check_key()? {
            if state.handle_key(code, mods) {
                break;
            }
        }

        if state.paused {
            term.sleep(0.1);
            continue;
        }

        scene.center.lat = state.lat;
        scene.center.lng = state.lng;
        globe.clear();
        globe.set_style(Style {
            scale: style.scale * state.zoom,
            ..style.clone()
        });
        scene.draw(&mut globe)?;

        // Bottom row is the status line
        let mut canvas = BrailleCanvas::new(width, height.saturating_sub(1));
        globe.render(&mut canvas);

        term.clear();
        canvas.blit(term);
        term.set_str(0, height as i32 - 1, &state.status(), Some(Color::DarkGrey), false);
        if state.show_help {
            render_help_overlay(term, HELP);
        }
        term.present()?;

        frames += 1;
        state.tick();
        term.sleep(options.frame_time);
    }

    debug!("live view drew {frames} frames");
    Ok(())
}

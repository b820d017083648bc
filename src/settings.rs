use crate::error::{Error, Result};
use crate::geo::{GeoPoint, EARTH_RADIUS_KM};
use crate::path::{Step, GRATICULE_STEP};
use crate::style::Style;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Overrides the front end's default style when present.
    pub style: Option<Style>,
    #[serde(default)]
    pub globe: GlobeSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GlobeSettings {
    pub step: f64,                    // Degrees per graticule segment
    pub interval: f64,                // Degrees between graticule lines
    pub center: Option<GeoPoint>,     // Initial view center
    pub earth_radius_km: f64,         // Sphere radius for distances
    pub paths: Vec<PathBuf>,          // Extra JSON path sets to draw
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            step: GRATICULE_STEP,
            interval: 15.0,
            center: None,
            earth_radius_km: EARTH_RADIUS_KM,
            paths: Vec::new(),
        }
    }
}

impl Settings {
    /// Load from `explicit` if given, otherwise from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load the default settings file. A missing or broken file yields defaults.
    pub fn load_default() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            debug!("no settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{e}");
                warn!("falling back to default settings");
                Self::default()
            }
        }
    }

    /// Load and validate a settings file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings_error = |message: String| Error::Settings {
            path: path.to_path_buf(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| settings_error(e.to_string()))?;
        let settings: Settings = toml::from_str(&content).map_err(|e| settings_error(e.to_string()))?;
        settings.validate().map_err(settings_error)?;

        info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(format!("globe.{name} must be positive, got {value}"))
            }
        };
        let step = |name: &str, value: f64| Step::new(value).map(|_| ()).map_err(|e| format!("globe.{name}: {e}"));
        step("step", self.globe.step)?;
        step("interval", self.globe.interval)?;
        positive("earth_radius_km", self.globe.earth_radius_km)?;
        if let Some(style) = &self.style {
            style.validate().map_err(|e| format!("style.{e}"))?;
        }
        Ok(())
    }

    /// The configured style, or `fallback` when the file has none.
    pub fn style_or(&self, fallback: Style) -> Style {
        self.style.clone().unwrap_or(fallback)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termglobe")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgb;
    use std::io::Write;

    fn write_settings(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = write_settings("");
        let settings = Settings::load_from(file.path()).unwrap();
        assert!(settings.style.is_none());
        assert_eq!(settings.globe.step, 1.0);
        assert_eq!(settings.globe.interval, 15.0);
        assert_eq!(settings.globe.earth_radius_km, 6371.0);
        assert!(settings.globe.center.is_none());
    }

    #[test]
    fn reads_style_and_globe_sections() {
        let file = write_settings(
            r##"
[style]
line_color = "navy"
dot_color = "#ff8800"
scale = 0.9

[globe]
interval = 30.0
center = { lat = 51.5, lng = -0.1 }
paths = ["/tmp/rivers.json"]
"##,
        );
        let settings = Settings::load_from(file.path()).unwrap();
        let style = settings.style_or(Style::terminal());
        assert_eq!(style.line_color, Rgb::new(0, 0, 128));
        assert_eq!(style.dot_color, Rgb::new(255, 136, 0));
        assert_eq!(style.scale, 0.9);
        assert_eq!(style.graticule_color, Style::default().graticule_color);
        assert_eq!(settings.globe.interval, 30.0);
        assert_eq!(settings.globe.step, 1.0);
        assert_eq!(settings.globe.center, Some(GeoPoint::new(51.5, -0.1)));
        assert_eq!(settings.globe.paths, vec![PathBuf::from("/tmp/rivers.json")]);
    }

    #[test]
    fn missing_style_uses_fallback() {
        let settings = Settings::default();
        assert_eq!(settings.style_or(Style::terminal()), Style::terminal());
    }

    #[test]
    fn rejects_invalid_values() {
        for content in [
            "[globe]\ninterval = 0.0\n",
            "[globe]\nstep = -1.0\n",
            "[globe]\nstep = 1e-9\n",
            "[globe]\ninterval = 1e-12\n",
            "[style]\nscale = 0.0\n",
            "[style]\nline_color = \"octarine\"\n",
            "[globe\n",
        ] {
            let file = write_settings(content);
            assert!(
                matches!(Settings::load_from(file.path()), Err(Error::Settings { .. })),
                "accepted {content:?}"
            );
        }
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/termglobe.toml")));
        assert!(matches!(result, Err(Error::Settings { .. })));
    }

    #[test]
    fn config_path_ends_with_app_dir() {
        let path = Settings::config_path();
        assert!(path.ends_with("termglobe/config.toml"));
    }
}

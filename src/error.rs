use crate::geo::GeoError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("settings error in {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },

    #[error("unknown color '{0}' (expected a color name or #rrggbb)")]
    Color(String),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("step must be a finite number of degrees, at least 0.01, got {0}")]
    InvalidStep(f64),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to load path set {}: {source}", path.display())]
    PathSet {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Args(String),
}

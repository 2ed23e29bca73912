use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    /// Icons are square, between 1 and `MAX_ICON_SIZE` pixels per side
    #[error("invalid icon size: {0}")]
    InvalidSize(u32),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("png encoding failed: {source}")]
    Encode {
        #[from]
        source: image::ImageError,
    },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io { path: path.into(), source }
    }
}

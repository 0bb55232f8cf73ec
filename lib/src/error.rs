use std::path::PathBuf;

/// Errors raised while loading an image or writing its transcoded rows
#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("failed to load image {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("row {y} is outside an image {height} pixels high")]
    RowOutOfRange { y: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

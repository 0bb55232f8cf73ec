//! asciiart - image to colour-escaped text converter
//!
//! Every pixel row of an image becomes one line of text. Each (horizontally
//! upscaled) pixel is one space, each run of identical colour is opened by a
//! colour token (`\x1c` plus six hex digits) and each line is closed by a
//! terminator (`\x19`). By default the markers are the escape text the old
//! converter script printed; they can also be emitted as control bytes.
//!
//! # Example
//! ```no_run
//! use asciiart::{convert_file, TranscodeConfig};
//!
//! let config = TranscodeConfig::default();
//! convert_file("Terminal.png", &config, std::io::stdout().lock()).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod sampling;
pub mod token;
pub mod transcoder;

use image::RgbaImage;
use std::io::Write;
use std::path::Path;

// Re-export main types for convenience
pub use config::TranscodeConfig;
pub use error::TranscodeError;
pub use token::{TokenEncoding, TokenLayout};
pub use transcoder::{ColorRun, color_runs, transcode_image, transcode_row, write_image};

/// Decode an image file into RGBA8
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage, TranscodeError> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|source| TranscodeError::Load {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Load an image file and write its transcoded rows to `writer`
pub fn convert_file<P: AsRef<Path>, W: Write>(
    path: P,
    config: &TranscodeConfig,
    writer: W,
) -> Result<(), TranscodeError> {
    let image = load_image(path)?;
    write_image(&image, config, writer)
}

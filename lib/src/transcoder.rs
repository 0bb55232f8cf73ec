use crate::config::TranscodeConfig;
use crate::error::TranscodeError;
use crate::sampling::{output_width, source_column};
use crate::token::{color_token_len, push_color_token, terminator};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use std::io::Write;

/// A maximal span of output positions sharing one compared colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRun {
    /// First output position of the run
    pub start: u32,
    /// Number of output positions (spaces) in the run
    pub len: u32,
    /// First pixel sampled for the run; this is what the token encodes
    pub color: Rgba<u8>,
}

/// Whether two samples belong to the same run
fn same_color(a: &Rgba<u8>, b: &Rgba<u8>, config: &TranscodeConfig) -> bool {
    if config.alpha_splits_runs {
        a.0 == b.0
    } else {
        a.0[..3] == b.0[..3]
    }
}

fn check_image(image: &RgbaImage) -> Result<(), TranscodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(TranscodeError::EmptyImage { width, height });
    }
    Ok(())
}

fn check_row(image: &RgbaImage, y: u32) -> Result<(), TranscodeError> {
    check_image(image)?;
    let height = image.height();
    if y >= height {
        return Err(TranscodeError::RowOutOfRange { y, height });
    }
    Ok(())
}

/// Rejects scales that leave no output position for the image width
fn check_output_width(image: &RgbaImage, config: &TranscodeConfig) -> Result<(), TranscodeError> {
    let width = image.width();
    if output_width(width, config.scale) == 0 {
        return Err(TranscodeError::InvalidConfig(format!(
            "scale {} leaves no columns for an image {} pixels wide",
            config.scale, width
        )));
    }
    Ok(())
}

/// Split one image row into colour runs
///
/// # Arguments
/// * `image` - Source image
/// * `y` - Row index, must be below the image height
/// * `config` - Configuration (scale and run comparison)
///
/// # Returns
/// Runs in left-to-right order; their lengths add up to the output width
pub fn color_runs(
    image: &RgbaImage,
    y: u32,
    config: &TranscodeConfig,
) -> Result<Vec<ColorRun>, TranscodeError> {
    check_row(image, y)?;
    Ok(row_runs(image, y, config))
}

fn row_runs(image: &RgbaImage, y: u32, config: &TranscodeConfig) -> Vec<ColorRun> {
    let width = image.width();
    let mut runs: Vec<ColorRun> = Vec::new();

    for x in 0..output_width(width, config.scale) {
        let pixel = image.get_pixel(source_column(x, width, config.scale), y);
        match runs.last_mut() {
            Some(run) if same_color(&run.color, pixel, config) => run.len += 1,
            _ => runs.push(ColorRun {
                start: x,
                len: 1,
                color: *pixel,
            }),
        }
    }

    runs
}

/// Transcode one image row into a line of text
///
/// Every run starts with a colour token, every output position is one
/// space, and the line ends with the terminator. The line carries no
/// trailing newline.
///
/// # Arguments
/// * `image` - Source image
/// * `y` - Row index, must be below the image height
/// * `config` - Configuration parameters
///
/// Fails when the scale leaves no output positions, since such a line
/// would carry no colour token.
pub fn transcode_row(
    image: &RgbaImage,
    y: u32,
    config: &TranscodeConfig,
) -> Result<String, TranscodeError> {
    config.validate().map_err(TranscodeError::InvalidConfig)?;
    check_row(image, y)?;
    check_output_width(image, config)?;
    Ok(row_line(image, y, config))
}

fn row_line(image: &RgbaImage, y: u32, config: &TranscodeConfig) -> String {
    let runs = row_runs(image, y, config);
    let spaces = output_width(image.width(), config.scale) as usize;
    let mut line = String::with_capacity(
        spaces + runs.len() * color_token_len(config.encoding) + terminator(config.encoding).len(),
    );

    for run in &runs {
        push_color_token(&mut line, &run.color, config.layout, config.encoding);
        line.extend(std::iter::repeat_n(' ', run.len as usize));
    }
    line.push_str(terminator(config.encoding));

    line
}

/// Transcode every row of an image
///
/// Rows are independent, so they are transcoded in parallel; the result
/// is in top-to-bottom order.
///
/// # Arguments
/// * `image` - Source image, at least 1x1
/// * `config` - Configuration parameters
///
/// # Returns
/// One line per image row
pub fn transcode_image(
    image: &RgbaImage,
    config: &TranscodeConfig,
) -> Result<Vec<String>, TranscodeError> {
    config.validate().map_err(TranscodeError::InvalidConfig)?;
    check_image(image)?;
    check_output_width(image, config)?;

    let (width, height) = image.dimensions();
    log::debug!(
        "transcoding {}x{} image to {} columns per line",
        width,
        height,
        output_width(width, config.scale)
    );

    let lines = (0..height)
        .into_par_iter()
        .map(|y| row_line(image, y, config))
        .collect();

    Ok(lines)
}

/// Transcode an image and write it out, one newline-terminated line per row
pub fn write_image<W: Write>(
    image: &RgbaImage,
    config: &TranscodeConfig,
    mut writer: W,
) -> Result<(), TranscodeError> {
    let lines = transcode_image(image, config)?;
    for line in &lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    log::debug!("wrote {} lines", lines.len());
    Ok(())
}

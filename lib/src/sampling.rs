//! Horizontal upscaling
//!
//! Each source row of `width` pixels is stretched to `floor(width * scale)`
//! output positions; output position `x` reads source column
//! `floor(x / scale)`. With the default scale of 1.5 every other source
//! pixel is sampled twice.

/// Number of output positions for a source row of `width` pixels
pub fn output_width(width: u32, scale: f64) -> u32 {
    (width as f64 * scale).floor() as u32
}

/// Source column sampled by output position `x`
///
/// Clamped to `width - 1` so rounding can never step past the row.
pub fn source_column(x: u32, width: u32, scale: f64) -> u32 {
    let sx = (x as f64 / scale).floor() as u32;
    sx.min(width.saturating_sub(1))
}

/// Source columns sampled by every output position of a row
pub fn sample_columns(width: u32, scale: f64) -> Vec<u32> {
    (0..output_width(width, scale))
        .map(|x| source_column(x, width, scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_width_default_scale() {
        assert_eq!(output_width(1, 1.5), 1);
        assert_eq!(output_width(2, 1.5), 3);
        assert_eq!(output_width(3, 1.5), 4);
        assert_eq!(output_width(10, 1.5), 15);
    }

    #[test]
    fn test_source_column_default_scale() {
        let columns = sample_columns(4, 1.5);
        assert_eq!(columns, vec![0, 0, 1, 2, 2, 3]);
    }

    #[test]
    fn test_two_pixel_row() {
        assert_eq!(sample_columns(2, 1.5), vec![0, 0, 1]);
    }

    #[test]
    fn test_identity_scale() {
        assert_eq!(sample_columns(5, 1.0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_downscale_skips_columns() {
        assert_eq!(sample_columns(6, 0.5), vec![0, 2, 4]);
    }

    #[test]
    fn test_source_column_is_clamped() {
        assert_eq!(source_column(100, 3, 1.5), 2);
    }

    #[test]
    fn test_every_source_column_reached_when_upscaling() {
        let columns = sample_columns(37, 1.5);
        for sx in 0..37 {
            assert!(columns.contains(&sx), "column {sx} never sampled");
        }
    }
}

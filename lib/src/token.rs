//! Colour-escape and terminator tokens
//!
//! A colour token is a lead marker followed by three two-digit lowercase hex
//! pairs. Which channels fill the three pairs is decided by [`TokenLayout`];
//! whether the markers are written as escape text or as control bytes is
//! decided by [`TokenEncoding`].

use image::Rgba;

/// Lead marker as escape text, ready to paste into a string literal
pub const LEAD_ESCAPED: &str = "\\x1c";

/// Terminator marker as escape text
pub const TERMINATOR_ESCAPED: &str = "\\x19";

/// Lead marker as a control byte
pub const LEAD_RAW: &str = "\u{1c}";

/// Terminator marker as a control byte
pub const TERMINATOR_RAW: &str = "\u{19}";

/// Channel order of the three hex pairs in a colour token
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TokenLayout {
    /// red, red, green: the historical layout, blue is never encoded
    #[default]
    Rrg,
    /// red three times, as the format string of the old converter script reads
    Rrr,
    /// red, green, blue: corrected layout
    Rgb,
}

impl TokenLayout {
    /// Channel values for the three hex pairs
    pub fn pairs(self, pixel: &Rgba<u8>) -> [u8; 3] {
        let [r, g, b, _a] = pixel.0;
        match self {
            TokenLayout::Rrg => [r, r, g],
            TokenLayout::Rrr => [r, r, r],
            TokenLayout::Rgb => [r, g, b],
        }
    }
}

/// How the lead and terminator markers are written
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TokenEncoding {
    /// Four characters of escape text (`\x1c`, `\x19`)
    #[default]
    Escaped,
    /// Single control bytes (0x1C, 0x19)
    Raw,
}

impl TokenEncoding {
    pub fn lead(self) -> &'static str {
        match self {
            TokenEncoding::Escaped => LEAD_ESCAPED,
            TokenEncoding::Raw => LEAD_RAW,
        }
    }

    pub fn terminator(self) -> &'static str {
        match self {
            TokenEncoding::Escaped => TERMINATOR_ESCAPED,
            TokenEncoding::Raw => TERMINATOR_RAW,
        }
    }
}

/// Append a colour token for `pixel` to `buf`
///
/// # Arguments
/// * `buf` - Line buffer to append to
/// * `pixel` - Sampled pixel; alpha is never encoded
/// * `layout` - Channel order of the hex pairs
/// * `encoding` - Escape text or control byte lead
pub fn push_color_token(
    buf: &mut String,
    pixel: &Rgba<u8>,
    layout: TokenLayout,
    encoding: TokenEncoding,
) {
    let [a, b, c] = layout.pairs(pixel);
    buf.push_str(encoding.lead());
    buf.push_str(&format!("{a:02x}{b:02x}{c:02x}"));
}

/// Terminator token closing every line
pub fn terminator(encoding: TokenEncoding) -> &'static str {
    encoding.terminator()
}

/// Length in bytes of one colour token
pub fn color_token_len(encoding: TokenEncoding) -> usize {
    encoding.lead().len() + 6
}

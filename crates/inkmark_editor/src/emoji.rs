//! Emoji code decoding

use crate::error::{EditorError, Result};

/// Decode a `U+1F600` style code point into the emoji string.
///
/// The two-character prefix is not inspected; the remainder must be a hex
/// Unicode scalar value.
pub fn decode_emoji_code(code: &str) -> Result<String> {
    let invalid = || EditorError::InvalidEmojiCode(code.to_string());
    let hex = code
        .get(2..)
        .filter(|hex| !hex.is_empty())
        .ok_or_else(invalid)?;
    let scalar = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    let glyph = char::from_u32(scalar).ok_or_else(invalid)?;
    Ok(glyph.to_string())
}

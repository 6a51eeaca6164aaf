// Text <-> bit stream conversion, 8 bits per character, MSB first.
// Characters are limited to code points 0..=255 (ASCII + Latin-1).

use crate::error::{LinkError, LinkResult};
use crate::types::{Bit, BitStream, validate_bits};

pub const BITS_PER_CHAR: usize = 8;

/// Convert byte to bit array (MSB first)
pub fn byte_to_bits(byte: u8) -> [Bit; 8] {
    let mut bits = [0u8; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> (7 - i)) & 1;
    }
    bits
}

/// Convert bit array to byte (MSB first)
pub fn bits_to_byte(bits: &[Bit]) -> u8 {
    let mut byte = 0u8;
    for (i, &bit) in bits
        .iter()
        .enumerate()
        .take(8)
    {
        if bit != 0 {
            byte |= 1 << (7 - i);
        }
    }
    byte
}

/// Expand `text` into its bit stream, one 8-bit code per character.
///
/// Characters above U+00FF have no 8-bit code and are rejected.
pub fn bits_from_text(text: &str) -> LinkResult<BitStream> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);
    for (position, ch) in text.chars().enumerate() {
        let code = u8::try_from(u32::from(ch))
            .map_err(|_| LinkError::UnsupportedCharacter { position, ch })?;
        bits.extend_from_slice(&byte_to_bits(code));
    }
    Ok(bits)
}

/// Rebuild text from a bit stream produced by [`bits_from_text`].
///
/// Every 8-bit group maps to the character with that code, so any
/// well-formed stream decodes, corrupted or not.
pub fn text_from_bits(bits: &[Bit]) -> LinkResult<String> {
    if bits.len() % BITS_PER_CHAR != 0 {
        return Err(LinkError::InvalidLength {
            len: bits.len(),
            multiple: BITS_PER_CHAR,
        });
    }
    validate_bits(bits)?;

    Ok(bits
        .chunks_exact(BITS_PER_CHAR)
        .map(|chunk| char::from(bits_to_byte(chunk)))
        .collect())
}

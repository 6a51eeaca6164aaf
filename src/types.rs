//! Element types shared by the link stages.
//!
//! Bits, real-valued levels and complex baseband symbols are kept as three
//! separate element types so a bit stream can never be handed to a stage
//! that expects symbols (or the other way round).

use num_complex::Complex64;

/// A single bit. Only `0` and `1` are valid; stages that consume bits reject
/// anything else with [`LinkError::InvalidBit`](crate::error::LinkError::InvalidBit).
pub type Bit = u8;

/// An ordered, fixed-length sequence of bits.
pub type BitStream = Vec<Bit>;

/// A real-valued symbol (BPSK symbol or Manchester level).
pub type Sample = f64;

/// A complex baseband symbol, `re` is in-phase and `im` is quadrature.
pub type IqSample = Complex64;

/// Checks that every element of `bits` is a valid bit.
pub fn validate_bits(bits: &[Bit]) -> crate::error::LinkResult<()> {
    match bits
        .iter()
        .position(|&b| b > 1)
    {
        Some(position) => Err(crate::error::LinkError::InvalidBit {
            position,
            value: bits[position],
        }),
        None => Ok(()),
    }
}

//! BPSK: antipodal real mapping, 0 -> -1.0, 1 -> +1.0

use super::Modulation;
use crate::error::LinkResult;
use crate::types::{Bit, BitStream, Sample, validate_bits};

/// Binary Phase Shift Keying
#[derive(Debug, Clone, Copy, Default)]
pub struct Bpsk;

impl Modulation for Bpsk {
    type Symbol = Sample;

    const NAME: &'static str = "BPSK";
    const BITS_PER_SYMBOL: usize = 1;

    fn modulate(&self, bits: &[Bit]) -> LinkResult<Vec<Sample>> {
        validate_bits(bits)?;
        Ok(bits
            .iter()
            .map(|&bit| 2.0 * Sample::from(bit) - 1.0)
            .collect())
    }

    /// Threshold at zero; a symbol of exactly 0.0 decides to 0.
    fn demodulate(&self, symbols: &[Sample]) -> BitStream {
        symbols
            .iter()
            .map(|&s| if s > 0.0 { 1 } else { 0 })
            .collect()
    }
}

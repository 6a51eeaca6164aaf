//! QPSK constellation (2 bits per symbol)
//!
//! Gray-coded mapping, s = 1/√2 so every point has unit energy:
//! (0,0) → (+s, +s)
//! (0,1) → (-s, +s)
//! (1,1) → (-s, -s)
//! (1,0) → (+s, -s)

use super::Modulation;
use crate::error::{LinkError, LinkResult};
use crate::types::{Bit, BitStream, IqSample, validate_bits};
use std::f64::consts::FRAC_1_SQRT_2;

/// Quadrature Phase Shift Keying (Gray coded)
#[derive(Debug, Clone, Copy, Default)]
pub struct Qpsk;

impl Qpsk {
    fn pair_to_iq(b0: Bit, b1: Bit) -> IqSample {
        let s = FRAC_1_SQRT_2;
        match (b0, b1) {
            (0, 0) => IqSample::new(s, s),
            (0, 1) => IqSample::new(-s, s),
            (1, 1) => IqSample::new(-s, -s),
            (1, 0) => IqSample::new(s, -s),
            // inputs are validated before mapping
            _ => unreachable!("non-binary QPSK bit pair ({b0}, {b1})"),
        }
    }

    /// Quadrant decision, magnitude is ignored. Zero counts as positive.
    fn iq_to_pair(sym: IqSample) -> [Bit; 2] {
        match (sym.re >= 0.0, sym.im >= 0.0) {
            (true, true) => [0, 0],
            (false, true) => [0, 1],
            (false, false) => [1, 1],
            (true, false) => [1, 0],
        }
    }
}

impl Modulation for Qpsk {
    type Symbol = IqSample;

    const NAME: &'static str = "QPSK";
    const BITS_PER_SYMBOL: usize = 2;

    fn modulate(&self, bits: &[Bit]) -> LinkResult<Vec<IqSample>> {
        if bits.len() % 2 != 0 {
            return Err(LinkError::OddLength {
                scheme: Self::NAME,
                len: bits.len(),
            });
        }
        validate_bits(bits)?;

        Ok(bits
            .chunks_exact(2)
            .map(|pair| Self::pair_to_iq(pair[0], pair[1]))
            .collect())
    }

    fn demodulate(&self, symbols: &[IqSample]) -> BitStream {
        symbols
            .iter()
            .flat_map(|&sym| Self::iq_to_pair(sym))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulation::average_energy;

    #[test]
    fn test_qpsk_mapping() {
        let symbols = Qpsk.modulate(&[0, 0, 1, 1]).unwrap();
        assert_eq!(symbols.len(), 2);
        assert!((symbols[0].re - 0.707).abs() < 1e-3);
        assert!((symbols[0].im - 0.707).abs() < 1e-3);
        assert!((symbols[1].re + 0.707).abs() < 1e-3);
        assert!((symbols[1].im + 0.707).abs() < 1e-3);
        assert_eq!(Qpsk.demodulate(&symbols), vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_qpsk_gray_table() {
        let bits = [0, 0, 0, 1, 1, 1, 1, 0];
        let symbols = Qpsk.modulate(&bits).unwrap();
        let signs: Vec<(bool, bool)> = symbols
            .iter()
            .map(|s| (s.re > 0.0, s.im > 0.0))
            .collect();
        assert_eq!(
            signs,
            vec![(true, true), (false, true), (false, false), (true, false)]
        );
        assert_eq!(Qpsk.demodulate(&symbols), bits.to_vec());
    }

    #[test]
    fn test_qpsk_boundaries() {
        let symbols = [
            IqSample::new(0.0, 0.0),
            IqSample::new(-0.1, 0.0),
            IqSample::new(0.0, -0.1),
            IqSample::new(-5.0, -0.001),
        ];
        assert_eq!(Qpsk.demodulate(&symbols), vec![0, 0, 0, 1, 1, 0, 1, 1]);
    }

    #[test]
    fn test_qpsk_unit_energy() {
        let symbols = Qpsk.modulate(&[0, 1, 1, 0, 0, 0, 1, 1, 1, 1]).unwrap();
        for sym in &symbols {
            assert!((sym.norm_sqr() - 1.0).abs() < 1e-12);
        }
        assert!((average_energy(&symbols) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_qpsk_rejects_odd_length() {
        let err = Qpsk.modulate(&[0, 1, 1]).unwrap_err();
        assert_eq!(err, LinkError::OddLength { scheme: "QPSK", len: 3 });
    }

    #[test]
    fn test_qpsk_rejects_invalid_bit() {
        let err = Qpsk.modulate(&[0, 1, 1, 9]).unwrap_err();
        assert_eq!(err, LinkError::InvalidBit { position: 3, value: 9 });
    }
}

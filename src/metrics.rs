// Bit error rate measurement

use crate::error::{LinkError, LinkResult};
use crate::types::Bit;
use serde::{Deserialize, Serialize};

/// Errors and bits seen so far; accumulates over several trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCount {
    pub errors: usize,
    pub bits: usize,
}

impl ErrorCount {
    /// Count mismatched positions between `tx` and `rx`.
    pub fn compare(tx: &[Bit], rx: &[Bit]) -> LinkResult<Self> {
        if tx.len() != rx.len() {
            return Err(LinkError::LengthMismatch {
                tx: tx.len(),
                rx: rx.len(),
            });
        }
        let errors = tx
            .iter()
            .zip(rx)
            .filter(|(a, b)| a != b)
            .count();
        Ok(Self {
            errors,
            bits: tx.len(),
        })
    }

    pub fn add(&mut self, other: ErrorCount) {
        self.errors += other.errors;
        self.bits += other.bits;
    }

    /// errors / bits, in [0, 1]
    pub fn ratio(&self) -> LinkResult<f64> {
        if self.bits == 0 {
            return Err(LinkError::EmptySequence);
        }
        Ok(self.errors as f64 / self.bits as f64)
    }
}

/// Fraction of positions where `tx` and `rx` differ.
///
/// Unequal lengths are a [`LinkError::LengthMismatch`]; two empty sequences
/// are rejected with [`LinkError::EmptySequence`].
pub fn bit_error_rate(tx: &[Bit], rx: &[Bit]) -> LinkResult<f64> {
    ErrorCount::compare(tx, rx)?.ratio()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_errors() {
        assert_eq!(bit_error_rate(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap(), 0.25);
    }

    #[test]
    fn test_identical_and_inverted() {
        let tx = [1, 0, 1, 1, 0];
        let inv: Vec<Bit> = tx.iter().map(|b| 1 - b).collect();
        assert_eq!(bit_error_rate(&tx, &tx).unwrap(), 0.0);
        assert_eq!(bit_error_rate(&tx, &inv).unwrap(), 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = bit_error_rate(&[0, 1, 1], &[0, 1]).unwrap_err();
        assert_eq!(err, LinkError::LengthMismatch { tx: 3, rx: 2 });
        let err = bit_error_rate(&[], &[1]).unwrap_err();
        assert_eq!(err, LinkError::LengthMismatch { tx: 0, rx: 1 });
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(bit_error_rate(&[], &[]).unwrap_err(), LinkError::EmptySequence);
    }

    #[test]
    fn test_accumulate_trials() {
        let mut total = ErrorCount::default();
        total.add(ErrorCount::compare(&[0, 0, 0, 0], &[1, 0, 0, 0]).unwrap());
        total.add(ErrorCount::compare(&[1, 1, 1, 1], &[1, 0, 0, 1]).unwrap());
        assert_eq!(total, ErrorCount { errors: 3, bits: 8 });
        assert_eq!(total.ratio().unwrap(), 0.375);
    }
}

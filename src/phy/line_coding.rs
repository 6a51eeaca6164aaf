// Manchester encoding: 1 -> [+1, -1], 0 -> [-1, +1]
use crate::error::{LinkError, LinkResult};
use crate::types::{Bit, BitStream, Sample};
use tracing::trace;

pub const LEVEL_HIGH: Sample = 1.0;
pub const LEVEL_LOW: Sample = -1.0;

/// A line code mapping bits onto two-level baseband samples.
pub trait LineCode {
    fn name(&self) -> &'static str;

    /// Number of levels emitted per bit.
    fn levels_per_bit(&self) -> usize;

    fn encode(&self, bits: &[Bit]) -> LinkResult<Vec<Sample>>;

    fn decode(&self, levels: &[Sample]) -> LinkResult<BitStream>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Manchester;

impl Manchester {
    pub fn new() -> Self {
        Self
    }

    /// Decide one level pair.
    ///
    /// Exact transitions decode directly; any other pair (e.g. `[1, 1]` or
    /// post-noise fractional values) falls back to the sign of the pair mean.
    fn decide_pair(first: Sample, second: Sample) -> Bit {
        if first == LEVEL_HIGH && second == LEVEL_LOW {
            1
        } else if first == LEVEL_LOW && second == LEVEL_HIGH {
            0
        } else if (first + second) / 2.0 > 0.0 {
            1
        } else {
            0
        }
    }
}

impl LineCode for Manchester {
    fn name(&self) -> &'static str {
        "Manchester"
    }

    fn levels_per_bit(&self) -> usize {
        2
    }

    /// slice of bits -> Manchester levels, two per bit
    fn encode(&self, bits: &[Bit]) -> LinkResult<Vec<Sample>> {
        let mut levels = Vec::with_capacity(bits.len() * 2);

        for (position, &bit) in bits.iter().enumerate() {
            match bit {
                // 1 -> high then low
                1 => levels.extend_from_slice(&[LEVEL_HIGH, LEVEL_LOW]),
                // 0 -> low then high
                0 => levels.extend_from_slice(&[LEVEL_LOW, LEVEL_HIGH]),
                value => return Err(LinkError::InvalidBit { position, value }),
            }
        }

        trace!("Manchester encoded {} bits into {} levels", bits.len(), levels.len());
        Ok(levels)
    }

    /// levels decoded to bits
    fn decode(&self, levels: &[Sample]) -> LinkResult<BitStream> {
        if levels.len() % 2 != 0 {
            return Err(LinkError::InvalidLength {
                len: levels.len(),
                multiple: 2,
            });
        }

        Ok(levels
            .chunks_exact(2)
            .map(|pair| Self::decide_pair(pair[0], pair[1]))
            .collect())
    }
}

/// Slice received levels back onto the two nominal levels:
/// anything above zero becomes +1, everything else -1.
pub fn hard_decision(levels: &[Sample]) -> Vec<Sample> {
    levels
        .iter()
        .map(|&level| if level > 0.0 { LEVEL_HIGH } else { LEVEL_LOW })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manchester_encoding() {
        let levels = Manchester.encode(&[1, 0, 1, 1]).unwrap();
        assert_eq!(levels, vec![1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0]);
        assert_eq!(Manchester.decode(&levels).unwrap(), vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_manchester_encoding_decoding() {
        let bits = vec![0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1];
        let levels = Manchester.encode(&bits).unwrap();
        assert_eq!(levels.len(), bits.len() * Manchester.levels_per_bit());
        assert_eq!(Manchester.decode(&levels).unwrap(), bits);
    }

    #[test]
    fn test_invalid_bit() {
        let err = Manchester.encode(&[1, 0, 2]).unwrap_err();
        assert_eq!(err, LinkError::InvalidBit { position: 2, value: 2 });
    }

    #[test]
    fn test_odd_level_count() {
        let err = Manchester.decode(&[1.0, -1.0, 1.0]).unwrap_err();
        assert_eq!(err, LinkError::InvalidLength { len: 3, multiple: 2 });
    }

    #[test]
    fn test_corrupted_pairs_use_mean() {
        // [1,1] -> mean 1 -> 1, [-1,-1] -> 0, fractional pairs by sign of mean
        let levels = [1.0, 1.0, -1.0, -1.0, 0.9, -0.4, -0.8, 0.3, 0.5, -0.5];
        assert_eq!(Manchester.decode(&levels).unwrap(), vec![1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_hard_decision() {
        let sliced = hard_decision(&[0.3, -0.01, 0.0, -2.5, 1.7]);
        assert_eq!(sliced, vec![1.0, -1.0, -1.0, -1.0, 1.0]);
    }
}

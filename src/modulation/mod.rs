//! Bit <-> symbol mappings.
//!
//! Both schemes place their constellation at unit average energy so the
//! channel can calibrate noise from the SNR the same way for either one.
//! - BPSK (1 bit/symbol, real)
//! - QPSK (2 bits/symbol, complex, Gray coded)

mod bpsk;
mod qpsk;

pub use bpsk::Bpsk;
pub use qpsk::Qpsk;

use crate::channel::ChannelSymbol;
use crate::error::LinkResult;
use crate::types::{Bit, BitStream};

/// Modulator/demodulator pair for one scheme.
pub trait Modulation: Send + Sync {
    /// Symbol type produced by the modulator and consumed by the demodulator.
    type Symbol: ChannelSymbol;

    /// Display name used in logs and reports.
    const NAME: &'static str;

    /// Bits carried by one symbol. Input lengths must be a multiple of this.
    const BITS_PER_SYMBOL: usize;

    /// Map bits to symbols. Rejects non-binary values and lengths the
    /// scheme cannot pack.
    fn modulate(&self, bits: &[Bit]) -> LinkResult<Vec<Self::Symbol>>;

    /// Hard-decision demapping, `BITS_PER_SYMBOL` bits per symbol.
    fn demodulate(&self, symbols: &[Self::Symbol]) -> BitStream;
}

/// Mean of `|s|^2` over `symbols`, zero for an empty slice.
pub fn average_energy<S: ChannelSymbol>(symbols: &[S]) -> f64 {
    if symbols.is_empty() {
        return 0.0;
    }
    symbols
        .iter()
        .map(ChannelSymbol::energy)
        .sum::<f64>()
        / symbols.len() as f64
}

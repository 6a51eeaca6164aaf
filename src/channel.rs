//! AWGN channel model.
//!
//! Noise is calibrated per call against the average energy of the symbols
//! being sent, so any input lands at the requested SNR relative to its own
//! power:
//!
//! ```text
//! E      = mean(|s|^2)
//! SNR    = 10^(snr_db / 10)
//! sigma2 = E / SNR
//! ```
//!
//! Real symbols receive noise of variance `sigma2`. Complex symbols receive
//! independent I and Q noise of variance `sigma2 / 2` each, so the total
//! noise power is still `sigma2`.

use crate::modulation::average_energy;
use crate::types::{IqSample, Sample};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::trace;

/// A symbol the AWGN channel knows how to corrupt.
pub trait ChannelSymbol: Copy + Send + Sync + 'static {
    /// `|s|^2`
    fn energy(&self) -> f64;

    /// Add zero-mean Gaussian noise with total variance `noise_variance`.
    fn add_noise<R: Rng + ?Sized>(self, noise_variance: f64, rng: &mut R) -> Self;
}

impl ChannelSymbol for Sample {
    fn energy(&self) -> f64 {
        self * self
    }

    fn add_noise<R: Rng + ?Sized>(self, noise_variance: f64, rng: &mut R) -> Self {
        let n: f64 = StandardNormal.sample(rng);
        self + noise_variance.sqrt() * n
    }
}

impl ChannelSymbol for IqSample {
    fn energy(&self) -> f64 {
        self.norm_sqr()
    }

    fn add_noise<R: Rng + ?Sized>(self, noise_variance: f64, rng: &mut R) -> Self {
        // Divide by 2 for I and Q
        let sigma = (noise_variance / 2.0).sqrt();
        let n_re: f64 = StandardNormal.sample(rng);
        let n_im: f64 = StandardNormal.sample(rng);
        self + IqSample::new(sigma * n_re, sigma * n_im)
    }
}

/// `10^(snr_db / 10)`
pub fn snr_linear(snr_db: f64) -> f64 {
    10.0_f64.powf(snr_db / 10.0)
}

/// Additive white Gaussian noise at a fixed SNR (dB).
#[derive(Debug, Clone, Copy)]
pub struct AwgnChannel {
    snr_db: f64,
}

impl AwgnChannel {
    pub fn new(snr_db: f64) -> Self {
        Self { snr_db }
    }

    /// Total noise variance for a signal of average energy `energy`.
    pub fn noise_variance(&self, energy: f64) -> f64 {
        energy / snr_linear(self.snr_db)
    }

    /// Return `symbols` plus noise. An empty input yields an empty output.
    pub fn apply<S, R>(&self, symbols: &[S], rng: &mut R) -> Vec<S>
    where
        S: ChannelSymbol,
        R: Rng + ?Sized,
    {
        let energy = average_energy(symbols);
        let sigma2 = self.noise_variance(energy);
        trace!(
            "AWGN: {} symbols, E={:.4}, snr={} dB, sigma2={:.3e}",
            symbols.len(),
            energy,
            self.snr_db,
            sigma2
        );

        symbols
            .iter()
            .map(|&s| s.add_noise(sigma2, rng))
            .collect()
    }
}

/// Pass `symbols` through an AWGN channel at `snr_db`.
pub fn apply_noise<S, R>(symbols: &[S], snr_db: f64, rng: &mut R) -> Vec<S>
where
    S: ChannelSymbol,
    R: Rng + ?Sized,
{
    AwgnChannel::new(snr_db).apply(symbols, rng)
}

//! BER × SNR sweep over a [`Modulation`].
//!
//! Every SNR point draws fresh uniformly random bits, modulates them, passes
//! the symbols through AWGN at that SNR, demodulates and counts errors. A
//! point may run several independent trials; their error counts are pooled.

use crate::channel::AwgnChannel;
use crate::error::{LinkError, LinkResult};
use crate::metrics::ErrorCount;
use crate::modulation::Modulation;
use crate::types::BitStream;
use crossbeam_channel::unbounded;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How a bit count that the scheme cannot pack is handled.
///
/// Both variants generate the count rounded up to a whole number of symbols;
/// they differ in how many bits take part in the comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddCountPolicy {
    /// Compare every generated bit (requested count rounded up).
    #[default]
    RoundUp,
    /// Compare only the first `bit_count` bits that were requested.
    CompareRequested,
}

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// SNR points in dB, reported in this order
    pub snr_db: Vec<f64>,
    /// Bits requested per trial
    pub bit_count: usize,
    /// Independent trials pooled per SNR point
    pub trials: usize,
    pub odd_count_policy: OddCountPolicy,
    /// Worker threads for [`BerSweep::run_seeded`]
    pub workers: usize,
}

impl SweepConfig {
    pub fn new(snr_db: Vec<f64>, bit_count: usize) -> Self {
        Self {
            snr_db,
            bit_count,
            trials: 1,
            odd_count_policy: OddCountPolicy::default(),
            workers: 1,
        }
    }
}

/// Result at one SNR point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub snr_db: f64,
    pub ber: f64,
    pub errors: ErrorCount,
}

pub struct BerSweep {
    config: SweepConfig,
}

impl BerSweep {
    pub fn new(config: SweepConfig) -> LinkResult<Self> {
        if config.bit_count == 0 {
            return Err(LinkError::InvalidConfig(
                "bit count must be at least 1".into(),
            ));
        }
        if config.trials == 0 {
            return Err(LinkError::InvalidConfig(
                "trial count must be at least 1".into(),
            ));
        }
        if config.workers == 0 {
            return Err(LinkError::InvalidConfig(
                "worker count must be at least 1".into(),
            ));
        }
        if let Some(snr) = config
            .snr_db
            .iter()
            .find(|snr| !snr.is_finite())
        {
            return Err(LinkError::InvalidConfig(format!(
                "SNR value {} is not finite",
                snr
            )));
        }
        Ok(Self { config })
    }

    /// `(generated, compared)` bit counts per trial for scheme `M`.
    pub fn bit_lengths<M: Modulation>(&self) -> (usize, usize) {
        let requested = self.config.bit_count;
        let generated = requested.div_ceil(M::BITS_PER_SYMBOL) * M::BITS_PER_SYMBOL;
        let compared = match self.config.odd_count_policy {
            OddCountPolicy::RoundUp => generated,
            OddCountPolicy::CompareRequested => requested,
        };
        (generated, compared)
    }

    /// One modulate → channel → demodulate pass.
    fn run_trial<M, R>(
        &self,
        modulation: &M,
        channel: &AwgnChannel,
        rng: &mut R,
    ) -> LinkResult<ErrorCount>
    where
        M: Modulation,
        R: Rng + ?Sized,
    {
        let (generated, compared) = self.bit_lengths::<M>();

        let tx: BitStream = random_bits(generated, rng);
        let symbols = modulation.modulate(&tx)?;
        let received = channel.apply(&symbols, rng);
        let mut rx = modulation.demodulate(&received);

        // cut anything the scheme appended beyond what was sent
        rx.truncate(tx.len());

        let rx_len = rx.len().min(compared);
        ErrorCount::compare(&tx[..compared], &rx[..rx_len])
    }

    /// All trials at one SNR point, drawing from `rng`.
    pub fn run_point<M, R>(
        &self,
        modulation: &M,
        snr_db: f64,
        rng: &mut R,
    ) -> LinkResult<SweepPoint>
    where
        M: Modulation,
        R: Rng + ?Sized,
    {
        let channel = AwgnChannel::new(snr_db);
        let mut errors = ErrorCount::default();
        for _ in 0..self.config.trials {
            errors.add(self.run_trial(modulation, &channel, rng)?);
        }
        let ber = errors.ratio()?;

        debug!(
            "{} SNR = {:>5.1} dB | errors = {}/{} | BER = {:.6e}",
            M::NAME,
            snr_db,
            errors.errors,
            errors.bits,
            ber
        );

        Ok(SweepPoint {
            snr_db,
            ber,
            errors,
        })
    }

    /// Sweep every SNR point in order on the calling thread, sharing one
    /// generator across points.
    pub fn run<M, R>(
        &self,
        modulation: &M,
        rng: &mut R,
        mut on_point: impl FnMut(&SweepPoint),
    ) -> LinkResult<Vec<SweepPoint>>
    where
        M: Modulation,
        R: Rng + ?Sized,
    {
        self.log_start::<M>();
        let mut points = Vec::with_capacity(self.config.snr_db.len());
        for &snr_db in &self.config.snr_db {
            let point = self.run_point(modulation, snr_db, rng)?;
            on_point(&point);
            points.push(point);
        }
        Ok(points)
    }

    /// Sweep with one generator per SNR point, seeded `base_seed + index`.
    ///
    /// Points are independent, so they are spread over `workers` threads when
    /// more than one is configured. The output is in SNR order and does not
    /// depend on the worker count.
    pub fn run_seeded<M>(
        &self,
        modulation: &M,
        base_seed: u64,
        mut on_point: impl FnMut(&SweepPoint),
    ) -> LinkResult<Vec<SweepPoint>>
    where
        M: Modulation,
    {
        self.log_start::<M>();
        let snrs = &self.config.snr_db;
        let workers = self.config.workers.min(snrs.len()).max(1);

        if workers == 1 {
            let mut points = Vec::with_capacity(snrs.len());
            for (index, &snr_db) in snrs.iter().enumerate() {
                let mut rng = point_rng(base_seed, index);
                let point = self.run_point(modulation, snr_db, &mut rng)?;
                on_point(&point);
                points.push(point);
            }
            return Ok(points);
        }

        let (job_tx, job_rx) = unbounded::<(usize, f64)>();
        let (result_tx, result_rx) = unbounded::<(usize, LinkResult<SweepPoint>)>();
        for job in snrs.iter().copied().enumerate() {
            if job_tx.send(job).is_err() {
                break;
            }
        }
        drop(job_tx);

        std::thread::scope(|scope| -> LinkResult<Vec<SweepPoint>> {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    for (index, snr_db) in job_rx.iter() {
                        let mut rng = point_rng(base_seed, index);
                        let point = self.run_point(modulation, snr_db, &mut rng);
                        if result_tx.send((index, point)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            let mut slots: Vec<Option<SweepPoint>> = vec![None; snrs.len()];
            for (index, point) in result_rx.iter() {
                let point = point?;
                on_point(&point);
                slots[index] = Some(point);
            }

            slots
                .into_iter()
                .enumerate()
                .map(|(index, slot)| {
                    slot.ok_or_else(|| {
                        LinkError::InvalidConfig(format!(
                            "sweep point {} produced no result",
                            index
                        ))
                    })
                })
                .collect()
        })
    }

    fn log_start<M: Modulation>(&self) {
        let (generated, compared) = self.bit_lengths::<M>();
        info!(
            "BER × SNR sweep - {}: {} points, {} bits/trial ({} compared), {} trial(s)",
            M::NAME,
            self.config.snr_db.len(),
            generated,
            compared,
            self.config.trials
        );
    }
}

/// `count` independent uniformly random bits.
pub fn random_bits<R: Rng + ?Sized>(count: usize, rng: &mut R) -> BitStream {
    (0..count)
        .map(|_| rng.random_range(0..=1u8))
        .collect()
}

fn point_rng(base_seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(index as u64))
}

/// BER at each of `snr_values`, one trial of `bit_count` bits per point.
pub fn sweep_ber<M, R>(
    modulation: &M,
    snr_values: &[f64],
    bit_count: usize,
    rng: &mut R,
) -> LinkResult<Vec<f64>>
where
    M: Modulation,
    R: Rng + ?Sized,
{
    let sweep = BerSweep::new(SweepConfig::new(snr_values.to_vec(), bit_count))?;
    Ok(sweep
        .run(modulation, rng, |_| {})?
        .into_iter()
        .map(|point| point.ber)
        .collect())
}

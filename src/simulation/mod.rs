/// Simulation drivers
pub mod manchester;
pub mod sweep;

pub use manchester::*;
pub use sweep::*;

use crate::error::LinkResult;
use crate::modulation::{Bpsk, Modulation, Qpsk};
use crate::report::BerTable;

/// Offset between the BPSK and QPSK seed ranges so the two sweeps never
/// share a generator stream.
const QPSK_SEED_OFFSET: u64 = 1 << 32;

/// Sweep BPSK and QPSK over the same SNR points and tabulate both.
///
/// `on_point` sees every finished point together with the scheme name.
pub fn compare_schemes(
    config: &SweepConfig,
    base_seed: u64,
    mut on_point: impl FnMut(&'static str, &SweepPoint),
) -> LinkResult<BerTable> {
    let sweep = BerSweep::new(config.clone())?;

    let bpsk = sweep.run_seeded(&Bpsk, base_seed, |p| on_point(Bpsk::NAME, p))?;
    let qpsk = sweep.run_seeded(
        &Qpsk,
        base_seed.wrapping_add(QPSK_SEED_OFFSET),
        |p| on_point(Qpsk::NAME, p),
    )?;

    BerTable::from_points(&bpsk, &qpsk)
}

use crate::error::{LinkError, LinkResult};
use crate::simulation::{OddCountPolicy, SweepConfig};
use crate::utils::consts::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything one run of the binary needs.
///
/// Missing JSON fields fall back to the defaults in `utils::consts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub message: String,
    pub demo_snr_db: Vec<f64>,
    pub sweep_snr_db: Vec<f64>,
    pub bit_count: usize,
    pub trials: usize,
    pub workers: usize,
    pub odd_count_policy: OddCountPolicy,
    /// Fixed seed for reproducible runs; drawn at random when absent
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            demo_snr_db: DEFAULT_DEMO_SNR_DB.to_vec(),
            sweep_snr_db: DEFAULT_SWEEP_SNR_DB.to_vec(),
            bit_count: DEFAULT_BIT_COUNT,
            trials: DEFAULT_TRIALS,
            workers: DEFAULT_WORKERS,
            odd_count_policy: OddCountPolicy::default(),
            seed: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json_str(&content)?)
    }

    pub fn validate(&self) -> LinkResult<()> {
        if self.bit_count == 0 {
            return Err(LinkError::InvalidConfig("bit_count must be at least 1".into()));
        }
        if self.trials == 0 {
            return Err(LinkError::InvalidConfig("trials must be at least 1".into()));
        }
        if self.workers == 0 {
            return Err(LinkError::InvalidConfig("workers must be at least 1".into()));
        }
        if self.sweep_snr_db.is_empty() {
            return Err(LinkError::InvalidConfig("sweep_snr_db is empty".into()));
        }
        if self.demo_snr_db.is_empty() {
            return Err(LinkError::InvalidConfig("demo_snr_db is empty".into()));
        }
        let all_finite = self
            .sweep_snr_db
            .iter()
            .chain(&self.demo_snr_db)
            .all(|snr| snr.is_finite());
        if !all_finite {
            return Err(LinkError::InvalidConfig("SNR values must be finite".into()));
        }
        Ok(())
    }

    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            snr_db: self.sweep_snr_db.clone(),
            bit_count: self.bit_count,
            trials: self.trials,
            odd_count_policy: self.odd_count_policy,
            workers: self.workers,
        }
    }

    /// The configured seed, or a fresh one from the thread generator.
    pub fn resolve_seed(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| rand::rng().random())
    }
}

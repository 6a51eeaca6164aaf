//! Baseband digital link simulator.
//!
//! text → bits → (Manchester | BPSK | QPSK) → AWGN → decisions → bits → text,
//! plus BER × SNR sweeps comparing the modulation schemes.

pub mod channel;
pub mod config;
pub mod error;
pub mod metrics;
pub mod modulation;
pub mod phy;
pub mod report;
pub mod simulation;
pub mod text;
pub mod types;
pub mod ui;
pub mod utils;

pub use error::{LinkError, LinkResult};

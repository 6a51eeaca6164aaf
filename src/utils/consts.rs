/// 日志级别（可被 RUST_LOG 覆盖）
pub const LOG_LEVEL: &str = "info";

/// 进度更新间隔（毫秒）
pub const PROGRESS_UPDATE_INTERVAL_MS: u64 = 50;

// ============================================================================
// Simulation defaults
// ============================================================================

/// Message sent through the Manchester demo
pub const DEFAULT_MESSAGE: &str = "BASEBAND LINK TEST 2025";

/// SNR points (dB) for the Manchester demo
pub const DEFAULT_DEMO_SNR_DB: [f64; 3] = [2.0, 5.0, 10.0];

/// SNR points (dB) for the BER sweep, ascending
pub const DEFAULT_SWEEP_SNR_DB: [f64; 6] = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];

/// Random bits per trial at every sweep point
pub const DEFAULT_BIT_COUNT: usize = 100_000;

/// Independent trials averaged at every sweep point
pub const DEFAULT_TRIALS: usize = 1;

/// Sweep worker threads (1 = run on the calling thread)
pub const DEFAULT_WORKERS: usize = 1;

/// Directory receiving CSV / JSON / transcript outputs
pub const DEFAULT_OUTPUT_DIR: &str = "results";

// Output file names
pub const BER_CSV_FILE: &str = "ber_bpsk_qpsk.csv";
pub const BER_JSON_FILE: &str = "ber_bpsk_qpsk.json";
pub const MANCHESTER_LOG_FILE: &str = "pipeline_manchester_log.txt";

/// Reporting: tables, transcripts and the files they are written to
pub mod table;
pub mod transcript;

pub use table::*;
pub use transcript::*;

use crate::simulation::ManchesterRun;
use crate::utils::consts::{BER_CSV_FILE, BER_JSON_FILE, MANCHESTER_LOG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Save text to file, creating parent directories
pub fn save_text_file(file_path: &Path, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(file_path, content)?;
    info!("Saved: {}", file_path.display());
    Ok(())
}

/// Write the comparison table as CSV and JSON under `output_dir`.
pub fn write_ber_table(
    output_dir: &Path,
    table: &BerTable,
) -> Result<(PathBuf, PathBuf), Box<dyn std::error::Error>> {
    let csv_path = output_dir.join(BER_CSV_FILE);
    save_text_file(&csv_path, &table.to_csv())?;

    let json_path = output_dir.join(BER_JSON_FILE);
    save_text_file(&json_path, &table.to_json()?)?;

    Ok((csv_path, json_path))
}

/// Write the Manchester transcript (header + one block per run).
pub fn write_manchester_log(
    output_dir: &Path,
    message: &str,
    runs: &[ManchesterRun],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut content = transcript_header(message);
    for run in runs {
        content.push_str(&transcript_block(run));
    }

    let path = output_dir.join(MANCHESTER_LOG_FILE);
    save_text_file(&path, &content)?;
    Ok(path)
}

//! BER × SNR comparison table and its CSV / JSON / console forms
use crate::error::{LinkError, LinkResult};
use crate::simulation::SweepPoint;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const CSV_HEADER: &str = "SNR_dB,BER_BPSK,BER_QPSK";

/// One SNR point of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BerRow {
    pub snr_db: f64,
    pub ber_bpsk: f64,
    pub ber_qpsk: f64,
}

/// Rows in sweep order (ascending SNR when the sweep was given ascending
/// points).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BerTable {
    pub rows: Vec<BerRow>,
}

impl BerTable {
    /// Zip two sweeps taken over the same SNR points.
    pub fn from_points(bpsk: &[SweepPoint], qpsk: &[SweepPoint]) -> LinkResult<Self> {
        if bpsk.len() != qpsk.len() {
            return Err(LinkError::LengthMismatch {
                tx: bpsk.len(),
                rx: qpsk.len(),
            });
        }

        let mut rows = Vec::with_capacity(bpsk.len());
        for (b, q) in bpsk.iter().zip(qpsk) {
            if b.snr_db != q.snr_db {
                return Err(LinkError::InvalidConfig(format!(
                    "sweeps disagree on SNR: {} dB vs {} dB",
                    b.snr_db, q.snr_db
                )));
            }
            rows.push(BerRow {
                snr_db: b.snr_db,
                ber_bpsk: b.ber,
                ber_qpsk: q.ber,
            });
        }
        Ok(Self { rows })
    }

    /// `SNR_dB,BER_BPSK,BER_QPSK` followed by one line per row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            let _ = writeln!(out, "{},{},{}", row.snr_db, row.ber_bpsk, row.ber_qpsk);
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Fixed-width table for the console.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "SNR (dB) |   BER BPSK    |   BER QPSK");
        let _ = writeln!(out, "{}", "-".repeat(45));
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:8.1} | {:>13.6e} | {:>13.6e}",
                row.snr_db, row.ber_bpsk, row.ber_qpsk
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ErrorCount;

    fn point(snr_db: f64, errors: usize) -> SweepPoint {
        SweepPoint {
            snr_db,
            ber: errors as f64 / 1000.0,
            errors: ErrorCount { errors, bits: 1000 },
        }
    }

    fn sample_table() -> BerTable {
        let bpsk = [point(0.0, 160), point(2.0, 100)];
        let qpsk = [point(0.0, 150), point(2.0, 105)];
        BerTable::from_points(&bpsk, &qpsk).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let csv = sample_table().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec![CSV_HEADER, "0,0.16,0.15", "2,0.1,0.105"]);
    }

    #[test]
    fn test_json_roundtrip() {
        let table = sample_table();
        let json = table.to_json().unwrap();
        let parsed: BerTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_render_has_row_per_point() {
        let rendered = sample_table().render();
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.starts_with("SNR (dB)"));
    }

    #[test]
    fn test_mismatched_sweeps() {
        let err = BerTable::from_points(&[point(0.0, 1)], &[]).unwrap_err();
        assert_eq!(err, LinkError::LengthMismatch { tx: 1, rx: 0 });
        assert!(BerTable::from_points(&[point(0.0, 1)], &[point(1.0, 1)]).is_err());
    }
}

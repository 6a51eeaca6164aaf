//! Manchester demo transcript and text comparison
use crate::simulation::ManchesterRun;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 60;

/// Result of text comparison
#[derive(Debug, Clone, PartialEq)]
pub struct TextComparisonResult {
    pub is_perfect_match: bool,
    pub original_length: usize,
    pub received_length: usize,
    pub first_difference: Option<TextDifference>,
}

/// Details about the first difference found
#[derive(Debug, Clone, PartialEq)]
pub struct TextDifference {
    pub position: usize,
    pub original_char: char,
    pub received_char: char,
}

/// Compare two texts character by character. Lengths are in characters.
pub fn compare_texts(original: &str, received: &str) -> TextComparisonResult {
    let first_difference = original
        .chars()
        .zip(received.chars())
        .enumerate()
        .find(|(_, (o, r))| o != r)
        .map(|(position, (original_char, received_char))| TextDifference {
            position,
            original_char,
            received_char,
        });

    TextComparisonResult {
        is_perfect_match: original == received,
        original_length: original.chars().count(),
        received_length: received.chars().count(),
        first_difference,
    }
}

/// Opening lines of the transcript log.
pub fn transcript_header(message: &str) -> String {
    format!(
        "Manchester + AWGN pipeline demonstration\nOriginal message: {}\n\n",
        message
    )
}

/// One block per demo run: SNR, bit count, both messages and BER.
pub fn transcript_block(run: &ManchesterRun) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "SNR = {} dB", run.snr_db);
    let _ = writeln!(out, "Bits transmitted : {}", run.bit_count);
    let _ = writeln!(out, "Sent message     : {}", run.message);
    let _ = writeln!(out, "Received message : {}", printable(&run.recovered));
    let _ = writeln!(out, "Bit errors       : {}", run.errors.errors);
    let _ = writeln!(out, "BER = {:.6}", run.ber);

    let comparison = compare_texts(&run.message, &run.recovered);
    if let Some(diff) = comparison.first_difference {
        let _ = writeln!(
            out,
            "First difference at position {}: {:?} vs {:?}",
            diff.position, diff.original_char, diff.received_char
        );
    }
    let _ = writeln!(out, "{}", rule);
    out.push('\n');
    out
}

/// Control characters produced by bit errors would garble the log.
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '\u{fffd}' } else { c })
        .collect()
}

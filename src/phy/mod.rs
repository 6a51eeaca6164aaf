// Physical layer: baseband line coding

pub mod line_coding;

pub use line_coding::{LineCode, Manchester, hard_decision};

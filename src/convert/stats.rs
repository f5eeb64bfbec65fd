//! Conversion statistics and result structure

use crate::frame::TypedFrame;
use serde::{Deserialize, Serialize};

/// Conversion result with the populated frame and statistics
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// The typed, column-oriented output frame
    pub frame: TypedFrame,

    /// Counters collected during conversion
    pub stats: ConvertStats,
}

/// Counters collected over one conversion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertStats {
    /// Number of raw records consumed from the source
    pub records_scanned: usize,

    /// Number of rows accepted by the filter and appended
    pub rows_accepted: usize,

    /// Number of rows the filter rejected
    pub rows_rejected: usize,

    /// Number of cells demoted to NA after a parse failure
    pub parse_failures: usize,

    /// Cache lookups that returned a previously parsed value
    pub cache_hits: usize,

    /// Cache lookups that required a parser invocation
    pub cache_misses: usize,

    /// Number of full cache clears triggered by capacity overflow
    pub cache_clears: usize,
}

impl ConvertStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of scanned records the filter accepted, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.records_scanned == 0 {
            0.0
        } else {
            (self.rows_accepted as f64 / self.records_scanned as f64) * 100.0
        }
    }
}

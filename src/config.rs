//! Conversion options
//!
//! Provides the configuration structure controlling parse cache sizing and
//! missing-value classification for a conversion run.

use crate::constants::{DEFAULT_NA_MARKER, DEFAULT_PARSE_CACHE_CAPACITY};
use serde::{Deserialize, Serialize};

/// Options controlling one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Maximum parse cache entry count before a full clear
    pub cache_capacity: usize,

    /// Text markers classified as NA before any parser runs
    ///
    /// The literal "null" and the empty string are always classified as NA
    /// in addition to these markers.
    pub na_markers: Vec<String>,
}

impl ConvertOptions {
    /// Check whether raw text matches one of the configured NA markers
    pub fn is_na_text(&self, text: &str) -> bool {
        self.na_markers.iter().any(|marker| marker == text)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_PARSE_CACHE_CAPACITY,
            na_markers: vec![DEFAULT_NA_MARKER.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.cache_capacity, DEFAULT_PARSE_CACHE_CAPACITY);
        assert!(options.is_na_text("NA"));
        assert!(!options.is_na_text("na"));
        assert!(!options.is_na_text("30"));
    }

    #[test]
    fn test_custom_markers() {
        let options = ConvertOptions {
            na_markers: vec!["-9999".to_string(), "missing".to_string()],
            ..ConvertOptions::default()
        };
        assert!(options.is_na_text("-9999"));
        assert!(options.is_na_text("missing"));
        assert!(!options.is_na_text("NA"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let options = ConvertOptions::default();
        let json = serde_json::to_string(&options).unwrap();
        let back: ConvertOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cache_capacity, options.cache_capacity);
        assert_eq!(back.na_markers, options.na_markers);
    }
}

//! Shared constants for tabcast conversion
//!
//! This module contains the default values and fixed text markers used
//! throughout the conversion pipeline.

// =============================================================================
// Parse Cache Defaults
// =============================================================================

/// Default maximum number of entries held by the parse cache.
///
/// When an insertion finds the cache above this size, the whole cache is
/// discarded before the insert. No incremental eviction takes place.
pub const DEFAULT_PARSE_CACHE_CAPACITY: usize = 10_000;

// =============================================================================
// Missing Value Markers
// =============================================================================

/// Literal text treated as an absent value regardless of column type
pub const NULL_TEXT: &str = "null";

/// Default missing-value marker (usually "NA")
pub const DEFAULT_NA_MARKER: &str = "NA";

// =============================================================================
// Datetime Formats
// =============================================================================

/// Datetime format with explicit UTC offset
pub const DATETIME_FORMAT_TZ: &str = "%Y-%m-%d %H:%M:%S %z";

/// Naive datetime format, interpreted as UTC
pub const DATETIME_FORMAT_NAIVE: &str = "%Y-%m-%d %H:%M:%S";

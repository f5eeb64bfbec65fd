//! Conversion of raw record sources into typed frames
//!
//! This module is the core of the crate: it orchestrates header resolution,
//! per-cell classification and parsing with memoization, row filtering, and
//! frame assembly.
//!
//! ## Architecture
//!
//! The engine is organized into logical components:
//! - [`engine`] - Conversion orchestration and per-cell fallback rules
//! - [`cache`] - Bounded parse memoization with full-clear-on-overflow
//! - [`filter`] - Row acceptance predicates
//! - [`stats`] - Conversion statistics and result structure
//!
//! ## Usage
//!
//! ```rust
//! use tabcast::convert::Converter;
//! use tabcast::schema::Schema;
//! use tabcast::source::MemorySource;
//! use tabcast::value::ValueType;
//!
//! # fn example() -> tabcast::Result<()> {
//! let schema = Schema::new().with_column("age", ValueType::Int)?;
//!
//! let mut source = MemorySource::new(["age"]);
//! source.push_text_row(["30"]);
//! source.push_text_row(["25"]);
//!
//! let result = Converter::new().convert(source, &schema)?;
//! println!(
//!     "converted {} rows, {} parse failures",
//!     result.frame.row_count(),
//!     result.stats.parse_failures
//! );
//! # Ok(())
//! # }
//! ```

mod cache;
pub mod engine;
pub mod filter;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::Converter;
pub use filter::{AcceptAll, RowFilter};
pub use stats::{ConvertResult, ConvertStats};

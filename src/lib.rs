//! tabcast
//!
//! A Rust library for converting raw tabular data sources (sequences of
//! records whose fields are exposed only as text) into strongly-typed,
//! column-oriented frames.
//!
//! This library provides tools for:
//! - Declaring an ordered schema of named, typed columns
//! - Parsing raw text cells per column type with layered NA fallback rules
//! - Memoizing parse results in a bounded, full-clear-on-overflow cache
//! - Filtering assembled rows with caller-supplied predicates
//! - Adapting in-memory rows or CSV documents as record sources
//!
//! ## Example
//!
//! ```rust
//! use tabcast::convert::Converter;
//! use tabcast::schema::Schema;
//! use tabcast::source::MemorySource;
//! use tabcast::value::{Value, ValueType};
//!
//! # fn main() -> tabcast::Result<()> {
//! let schema = Schema::new()
//!     .with_column("age", ValueType::Int)?
//!     .with_column("name", ValueType::Text)?;
//!
//! let mut source = MemorySource::new(["name", "age"]);
//! source.push_text_row(["alice", "30"]);
//! source.push_text_row(["bob", "null"]);
//!
//! let result = Converter::new().convert(source, &schema)?;
//! assert_eq!(result.frame.value(0, "age"), Some(&Value::Int(30)));
//! assert!(result.frame.value(1, "age").unwrap().is_na());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod convert;
pub mod frame;
pub mod numeric;
pub mod parse;
pub mod schema;
pub mod source;
pub mod value;

// Re-export commonly used types
pub use config::ConvertOptions;
pub use convert::{AcceptAll, ConvertResult, ConvertStats, Converter, RowFilter};
pub use frame::{Column, TypedFrame, TypedRow};
pub use schema::{ColumnSpec, Schema};
pub use source::{CsvSource, DataSource, Header, MemorySource, RawRecord};
pub use value::{Value, ValueType};

/// Result type alias for tabcast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for conversion operations
///
/// Structural faults only: per-cell parse failures are recovered inside the
/// conversion engine (the cell becomes NA) and never surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A schema column is missing from the source header
    #[error("column '{column}' not found in source header")]
    UnknownColumn { column: String },

    /// A schema declared the same column name twice
    #[error("duplicate column '{column}' in schema")]
    DuplicateColumn { column: String },

    /// Reading records from a source failed
    #[error("source read error: {message}")]
    SourceRead {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an unknown-column error
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    /// Create a duplicate-column error
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Create a source read error with context
    pub fn source_read(message: impl Into<String>, source: csv::Error) -> Self {
        Self::SourceRead {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

//! Conversion engine orchestration
//!
//! The engine resolves each schema column against the source header once,
//! then streams records through a classify → cache → parse pipeline, passes
//! every assembled row to the filter, and appends accepted rows to the
//! frame in input order.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::cache::ParseCache;
use super::filter::{AcceptAll, RowFilter};
use super::stats::{ConvertResult, ConvertStats};
use crate::config::ConvertOptions;
use crate::constants::NULL_TEXT;
use crate::frame::{TypedFrame, TypedRow};
use crate::schema::{ColumnSpec, Schema};
use crate::source::{DataSource, RawRecord};
use crate::value::Value;
use crate::{Error, Result};

/// Conversion engine for raw tabular sources
///
/// Given a source of raw records, an ordered schema, and an optional row
/// filter, produces a [`TypedFrame`] containing exactly the rows the filter
/// accepted, with cells parsed per column specification.
///
/// # Example
///
/// ```rust
/// use tabcast::convert::Converter;
/// use tabcast::schema::Schema;
/// use tabcast::source::MemorySource;
/// use tabcast::value::{Value, ValueType};
///
/// # fn example() -> tabcast::Result<()> {
/// let schema = Schema::new().with_column("age", ValueType::Int)?;
///
/// let mut source = MemorySource::new(["age"]);
/// source.push_text_row(["30"]);
/// source.push_text_row(["abc"]); // becomes NA, conversion continues
///
/// let result = Converter::new().convert(source, &schema)?;
/// assert_eq!(result.frame.value(0, "age"), Some(&Value::Int(30)));
/// assert_eq!(result.frame.value(1, "age"), Some(&Value::Na));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Create a converter with explicit options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// The options this converter runs with
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a source accepting every row
    pub fn convert<S: DataSource>(&self, source: S, schema: &Schema) -> Result<ConvertResult> {
        self.convert_with_filter(source, schema, &AcceptAll)
    }

    /// Convert a source, appending only the rows the filter accepts
    ///
    /// Structural faults (a schema column missing from the source header)
    /// abort the whole conversion. Per-cell parse failures degrade to NA and
    /// never reject a row; rejection is solely the filter's decision.
    pub fn convert_with_filter<S, F>(
        &self,
        source: S,
        schema: &Schema,
        filter: &F,
    ) -> Result<ConvertResult>
    where
        S: DataSource,
        F: RowFilter + ?Sized,
    {
        let mut stats = ConvertStats::new();
        let mut frame = TypedFrame::with_schema(schema);

        // A schema with no columns or a source with no addressable fields:
        // return the declared columns without consuming any records.
        if schema.is_empty() || source.header().is_empty() {
            debug!(
                "nothing to convert: {} schema columns, {} source fields",
                schema.len(),
                source.header().len()
            );
            return Ok(ConvertResult { frame, stats });
        }

        // Resolve every column position exactly once, in schema order.
        let mut positions = Vec::with_capacity(schema.len());
        for spec in schema {
            let position = source
                .header()
                .index_of(spec.name())
                .ok_or_else(|| Error::unknown_column(spec.name()))?;
            positions.push(position);
        }

        let mut cache = ParseCache::new(self.options.cache_capacity);
        let header = Arc::clone(frame.header());

        for record in source.into_records() {
            stats.records_scanned += 1;

            let mut values = Vec::with_capacity(schema.len());
            for (spec, &position) in schema.iter().zip(&positions) {
                values.push(self.convert_cell(
                    record.field(position),
                    spec,
                    &mut cache,
                    &mut stats,
                ));
            }

            let row = TypedRow::new(Arc::clone(&header), values, frame.row_count());
            if filter.accepts(&row) {
                frame.append_row(row);
                stats.rows_accepted += 1;
            } else {
                stats.rows_rejected += 1;
            }
        }

        stats.cache_clears = cache.clears();
        debug!(
            "parse cache finished with {} entries after {} clears",
            cache.len(),
            cache.clears()
        );
        info!(
            "converted {} rows from {} records ({} rejected, {} parse failures)",
            stats.rows_accepted, stats.records_scanned, stats.rows_rejected, stats.parse_failures
        );

        Ok(ConvertResult { frame, stats })
    }

    /// Produce the value for one cell, degrading to NA on any failure
    ///
    /// Structural checks come first: absent, empty, literal "null" or
    /// NA-marker text is classified NA without touching the cache or any
    /// parser. Only orderable parse results are cached and used.
    fn convert_cell(
        &self,
        raw: Option<&str>,
        spec: &ColumnSpec,
        cache: &mut ParseCache,
        stats: &mut ConvertStats,
    ) -> Value {
        let Some(text) = raw else {
            return Value::Na;
        };
        if text.is_empty() || text == NULL_TEXT || self.options.is_na_text(text) {
            return Value::Na;
        }

        if let Some(hit) = cache.lookup(spec.value_type(), text) {
            stats.cache_hits += 1;
            return hit.clone();
        }
        stats.cache_misses += 1;

        match spec.value_type().parse_text(text) {
            Ok(value) if value.is_orderable() => {
                cache.insert(spec.value_type(), text, value.clone());
                value
            }
            // Parsed but unusable (e.g. float NaN): NA without a diagnostic
            Ok(_) => Value::Na,
            Err(fault) => {
                warn!("error parsing column '{}': {fault}, NA added", spec.name());
                stats.parse_failures += 1;
                Value::Na
            }
        }
    }
}

//! Raw record sources consumed by the conversion engine
//!
//! A source exposes a [`Header`] mapping column names to positional indices
//! and yields raw records aligned to that header. The engine only ever sees
//! text-or-absent fields; everything typed happens downstream.
//!
//! Two concrete sources are provided: [`MemorySource`] over rows of optional
//! strings, and [`CsvSource`], a thin adapter over the `csv` crate's reader.

use crate::{Error, Result};
use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Name-to-position mapping for a source's fields
///
/// Built once per source; lookups are O(1). When a name occurs more than
/// once the later occurrence wins, matching the underlying reader's own
/// behavior.
#[derive(Debug, Clone, Default)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    /// Build a header from field names in positional order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            index.insert(name.clone(), position);
        }
        Self { names, index }
    }

    /// Positional index of a named field, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Number of fields the header declares
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the header declares zero fields
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Field names in positional order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// One input row: an ordered sequence of raw text fields
///
/// Fields are extracted positionally; an absent field (index beyond the
/// record, or an explicitly null cell) is `None`.
pub trait RawRecord {
    /// Raw text at the given position, or `None` if absent
    fn field(&self, index: usize) -> Option<&str>;
}

impl RawRecord for Vec<Option<String>> {
    fn field(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|cell| cell.as_deref())
    }
}

impl RawRecord for csv::StringRecord {
    fn field(&self, index: usize) -> Option<&str> {
        self.get(index)
    }
}

/// A container of raw records with a queryable header
///
/// Consumed by one conversion: records are yielded in source order, one at
/// a time, by value.
pub trait DataSource {
    /// Record type yielded by this source
    type Record: RawRecord;

    /// Iterator over the source's records
    type IntoIter: Iterator<Item = Self::Record>;

    /// The source's header
    fn header(&self) -> &Header;

    /// Consume the source, yielding records in order
    fn into_records(self) -> Self::IntoIter;
}

/// In-memory data source over rows of optional strings
///
/// The workhorse for tests and for callers that already hold their records
/// in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    header: Header,
    rows: Vec<Vec<Option<String>>>,
}

impl MemorySource {
    /// Create a source with the given field names and no rows
    pub fn new<I, S>(field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: Header::from_names(field_names),
            rows: Vec::new(),
        }
    }

    /// Append a row of optional raw text fields
    pub fn push_row<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = Option<String>>,
    {
        self.rows.push(fields.into_iter().collect());
    }

    /// Append a row where every field is present
    pub fn push_text_row<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .push(fields.into_iter().map(|f| Some(f.into())).collect());
    }

    /// Number of rows currently held
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl DataSource for MemorySource {
    type Record = Vec<Option<String>>;
    type IntoIter = std::vec::IntoIter<Vec<Option<String>>>;

    fn header(&self) -> &Header {
        &self.header
    }

    fn into_records(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Data source adapting the `csv` crate's reader
///
/// Reads the header and all records eagerly so that malformed input is
/// reported at construction time rather than mid-conversion.
#[derive(Debug, Clone)]
pub struct CsvSource {
    header: Header,
    records: Vec<csv::StringRecord>,
}

impl CsvSource {
    /// Read a CSV document from any reader
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header = {
            let headers = csv_reader
                .headers()
                .map_err(|e| Error::source_read("failed to read CSV header", e))?;
            Header::from_names(headers.iter())
        };

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record =
                result.map_err(|e| Error::source_read("failed to read CSV record", e))?;
            records.push(record);
        }

        Ok(Self { header, records })
    }

    /// Read a CSV document from a file path
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Number of records read from the document
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl DataSource for CsvSource {
    type Record = csv::StringRecord;
    type IntoIter = std::vec::IntoIter<csv::StringRecord>;

    fn header(&self) -> &Header {
        &self.header
    }

    fn into_records(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

//! Column-oriented typed frame

use super::column::Column;
use super::row::TypedRow;
use crate::schema::Schema;
use crate::source::Header;
use crate::value::Value;
use std::sync::Arc;

/// The typed, column-oriented output of a conversion
///
/// Columns appear in schema order; rows appear in acceptance order. Rows,
/// once appended, are never removed by the conversion engine.
#[derive(Debug, Clone)]
pub struct TypedFrame {
    header: Arc<Header>,
    columns: Vec<Column>,
}

impl TypedFrame {
    /// Create an empty frame with the schema's columns attached
    pub fn with_schema(schema: &Schema) -> Self {
        let header = Arc::new(Header::from_names(schema.names()));
        let columns = schema
            .iter()
            .map(|spec| Column::new(spec.clone()))
            .collect();
        Self { header, columns }
    }

    /// The frame's header, shared with every row it produces
    pub fn header(&self) -> &Arc<Header> {
        &self.header
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Check whether the frame holds no rows
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Column addressed by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.header
            .index_of(name)
            .and_then(|position| self.columns.get(position))
    }

    /// Column addressed by position
    pub fn column_at(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    /// All columns in schema order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Cell value addressed by row index and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        self.column(column).and_then(|col| col.get(row))
    }

    /// Materialize the row at the given index
    pub fn row(&self, index: usize) -> Option<TypedRow> {
        if index >= self.row_count() {
            return None;
        }
        let values = self
            .columns
            .iter()
            .map(|col| col.get(index).cloned().unwrap_or(Value::Na))
            .collect();
        Some(TypedRow::new(Arc::clone(&self.header), values, index))
    }

    /// Iterate materialized rows in order
    pub fn rows(&self) -> impl Iterator<Item = TypedRow> + '_ {
        (0..self.row_count()).map(|index| self.row(index).expect("index within row_count"))
    }

    /// Append an accepted row, distributing its cells into the columns
    ///
    /// The row must carry exactly one value per column; the conversion
    /// engine guarantees this for every row it assembles.
    pub(crate) fn append_row(&mut self, row: TypedRow) {
        debug_assert_eq!(row.len(), self.columns.len());
        for (column, value) in self.columns.iter_mut().zip(row.into_values()) {
            column.push(value);
        }
    }
}

//! Single typed column of a frame

use crate::schema::ColumnSpec;
use crate::value::{Value, ValueType};

/// One output column: its specification and its cells in row order
#[derive(Debug, Clone)]
pub struct Column {
    spec: ColumnSpec,
    values: Vec<Value>,
}

impl Column {
    pub(crate) fn new(spec: ColumnSpec) -> Self {
        Self {
            spec,
            values: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Column name
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Value type the column's cells were parsed as
    pub fn value_type(&self) -> ValueType {
        self.spec.value_type()
    }

    /// The column's specification
    pub fn spec(&self) -> &ColumnSpec {
        &self.spec
    }

    /// Number of cells in the column
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the column holds no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cell at the given row index
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// All cells in row order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of NA cells in the column
    pub fn na_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_na()).count()
    }
}

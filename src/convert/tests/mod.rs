//! Tests for the conversion engine module
//!
//! This module provides unit and integration tests for the conversion
//! pipeline, the parse cache and row filtering.

pub mod engine_tests;

use crate::schema::Schema;
use crate::source::MemorySource;
use crate::value::ValueType;

/// Create a single-column integer schema named "age"
pub fn age_schema() -> Schema {
    Schema::new().with_column("age", ValueType::Int).unwrap()
}

/// Create a single-column source named "age" with the given raw values
pub fn age_source(values: &[&str]) -> MemorySource {
    let mut source = MemorySource::new(["age"]);
    for value in values {
        source.push_text_row([*value]);
    }
    source
}

/// Create a two-column source ("age" int-ish, "name" text) with rows
pub fn people_source(rows: &[(&str, &str)]) -> MemorySource {
    let mut source = MemorySource::new(["age", "name"]);
    for (age, name) in rows {
        source.push_text_row([*age, *name]);
    }
    source
}

//! Tests for the conversion engine

use super::{age_schema, age_source, people_source};
use crate::config::ConvertOptions;
use crate::convert::Converter;
use crate::schema::Schema;
use crate::source::{CsvSource, MemorySource};
use crate::value::{Value, ValueType};

#[test]
fn test_worked_example_from_contract() {
    // Integer column over ["30", "", "abc", "null"] with the default filter:
    // four rows, [30, NA, NA, NA]; only "abc" is a parse failure.
    let source = age_source(&["30", "", "abc", "null"]);
    let result = Converter::new().convert(source, &age_schema()).unwrap();

    assert_eq!(result.frame.row_count(), 4);
    let cells = result.frame.column("age").unwrap().values();
    assert_eq!(
        cells,
        &[Value::Int(30), Value::Na, Value::Na, Value::Na]
    );
    assert_eq!(result.stats.parse_failures, 1);
}

#[test]
fn test_empty_schema_short_circuits() {
    let source = age_source(&["30", "25"]);
    let result = Converter::new().convert(source, &Schema::new()).unwrap();

    assert_eq!(result.frame.column_count(), 0);
    assert_eq!(result.frame.row_count(), 0);
    // No records were consumed
    assert_eq!(result.stats.records_scanned, 0);
}

#[test]
fn test_zero_field_header_short_circuits() {
    let mut source = MemorySource::new(Vec::<String>::new());
    source.push_row(Vec::<Option<String>>::new());
    let result = Converter::new().convert(source, &age_schema()).unwrap();

    // Declared columns are attached even though nothing was converted
    assert_eq!(result.frame.column_count(), 1);
    assert_eq!(result.frame.column("age").unwrap().value_type(), ValueType::Int);
    assert_eq!(result.frame.row_count(), 0);
    assert_eq!(result.stats.records_scanned, 0);
}

#[test]
fn test_column_order_follows_schema_not_source() {
    // Source declares name before age; the schema wants age first
    let mut source = MemorySource::new(["name", "age"]);
    source.push_text_row(["alice", "30"]);

    let schema = Schema::new()
        .with_column("age", ValueType::Int)
        .unwrap()
        .with_column("name", ValueType::Text)
        .unwrap();

    let result = Converter::new().convert(source, &schema).unwrap();
    let names: Vec<&str> = result.frame.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["age", "name"]);
    assert_eq!(result.frame.value(0, "age"), Some(&Value::Int(30)));
    assert_eq!(
        result.frame.value(0, "name"),
        Some(&Value::Text("alice".to_string()))
    );
}

#[test]
fn test_row_order_is_input_order() {
    let source = age_source(&["3", "1", "2"]);
    let result = Converter::new().convert(source, &age_schema()).unwrap();

    let cells = result.frame.column("age").unwrap().values();
    assert_eq!(cells, &[Value::Int(3), Value::Int(1), Value::Int(2)]);
}

#[test]
fn test_na_classification_skips_parser_and_cache() {
    // All three markers classify before any parser runs: no failures, no
    // cache traffic.
    let mut source = MemorySource::new(["age"]);
    source.push_row([None]);
    source.push_text_row([""]);
    source.push_text_row(["null"]);
    source.push_text_row(["NA"]);

    let result = Converter::new().convert(source, &age_schema()).unwrap();

    assert_eq!(result.frame.row_count(), 4);
    assert!(result.frame.column("age").unwrap().values().iter().all(Value::is_na));
    assert_eq!(result.stats.parse_failures, 0);
    assert_eq!(result.stats.cache_misses, 0);
    assert_eq!(result.stats.cache_hits, 0);
}

#[test]
fn test_na_markers_apply_to_text_columns_too() {
    // Even a text column, whose parser accepts anything, never sees marker
    // text: classification precedes parsing.
    let mut source = MemorySource::new(["comment"]);
    source.push_text_row(["null"]);
    source.push_text_row(["NA"]);
    source.push_text_row(["fine"]);

    let schema = Schema::new().with_column("comment", ValueType::Text).unwrap();
    let result = Converter::new().convert(source, &schema).unwrap();

    let cells = result.frame.column("comment").unwrap().values();
    assert_eq!(
        cells,
        &[Value::Na, Value::Na, Value::Text("fine".to_string())]
    );
}

#[test]
fn test_custom_na_markers() {
    let options = ConvertOptions {
        na_markers: vec!["-9999".to_string()],
        ..ConvertOptions::default()
    };
    let source = age_source(&["-9999", "30", "NA"]);
    let result = Converter::with_options(options)
        .convert(source, &age_schema())
        .unwrap();

    let cells = result.frame.column("age").unwrap().values();
    // "-9999" is now a marker; "NA" no longer is, and fails integer parsing
    assert_eq!(cells, &[Value::Na, Value::Int(30), Value::Na]);
    assert_eq!(result.stats.parse_failures, 1);
}

#[test]
fn test_repeated_text_parsed_once() {
    let source = age_source(&["30", "30", "30"]);
    let result = Converter::new().convert(source, &age_schema()).unwrap();

    assert_eq!(result.stats.cache_misses, 1);
    assert_eq!(result.stats.cache_hits, 2);
    let cells = result.frame.column("age").unwrap().values();
    assert!(cells.iter().all(|v| *v == Value::Int(30)));
}

#[test]
fn test_cache_clear_forces_reparse() {
    // Capacity 2: "1", "2", "3" fill past capacity; inserting "4" clears,
    // so the second "3" misses again.
    let options = ConvertOptions {
        cache_capacity: 2,
        ..ConvertOptions::default()
    };
    let source = age_source(&["1", "2", "3", "4", "3"]);
    let result = Converter::with_options(options)
        .convert(source, &age_schema())
        .unwrap();

    assert_eq!(result.stats.cache_misses, 5);
    assert_eq!(result.stats.cache_hits, 0);
    assert_eq!(result.stats.cache_clears, 1);
    // Values are still all correct; the cache is an optimization only
    let cells = result.frame.column("age").unwrap().values();
    assert_eq!(
        cells,
        &[Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4), Value::Int(3)]
    );
}

#[test]
fn test_nan_is_silently_demoted_to_na() {
    let mut source = MemorySource::new(["score"]);
    source.push_text_row(["NaN"]);
    source.push_text_row(["NaN"]);
    source.push_text_row(["1.5"]);

    let schema = Schema::new().with_column("score", ValueType::Float).unwrap();
    let result = Converter::new().convert(source, &schema).unwrap();

    let cells = result.frame.column("score").unwrap().values();
    assert_eq!(cells, &[Value::Na, Value::Na, Value::Float(1.5)]);
    // Parsing succeeded, so no failure diagnostic; the unusable result is
    // never cached, so the second "NaN" misses again.
    assert_eq!(result.stats.parse_failures, 0);
    assert_eq!(result.stats.cache_misses, 3);
    assert_eq!(result.stats.cache_hits, 0);
}

#[test]
fn test_unknown_column_is_fatal() {
    let source = age_source(&["30"]);
    let schema = Schema::new().with_column("height", ValueType::Float).unwrap();

    let err = Converter::new().convert(source, &schema).unwrap_err();
    assert!(err.to_string().contains("height"));
}

#[test]
fn test_parse_failure_never_rejects_row() {
    let source = people_source(&[("abc", "alice"), ("30", "bob")]);
    let schema = Schema::new()
        .with_column("age", ValueType::Int)
        .unwrap()
        .with_column("name", ValueType::Text)
        .unwrap();

    let result = Converter::new().convert(source, &schema).unwrap();

    // Both rows survive; the bad cell is NA, its neighbors untouched
    assert_eq!(result.frame.row_count(), 2);
    assert_eq!(result.frame.value(0, "age"), Some(&Value::Na));
    assert_eq!(
        result.frame.value(0, "name"),
        Some(&Value::Text("alice".to_string()))
    );
    assert_eq!(result.frame.value(1, "age"), Some(&Value::Int(30)));
}

#[test]
fn test_short_records_yield_na() {
    let mut source = MemorySource::new(["a", "b"]);
    source.push_row([Some("1".to_string())]); // field "b" absent entirely

    let schema = Schema::new()
        .with_column("a", ValueType::Int)
        .unwrap()
        .with_column("b", ValueType::Int)
        .unwrap();

    let result = Converter::new().convert(source, &schema).unwrap();
    assert_eq!(result.frame.value(0, "a"), Some(&Value::Int(1)));
    assert_eq!(result.frame.value(0, "b"), Some(&Value::Na));
}

#[test]
fn test_stats_reconcile_with_frame() {
    let source = age_source(&["1", "2", "3", "4"]);
    let filter = |row: &crate::frame::TypedRow| {
        matches!(row.get("age"), Some(Value::Int(n)) if n % 2 == 0)
    };
    let result = Converter::new()
        .convert_with_filter(source, &age_schema(), &filter)
        .unwrap();

    assert_eq!(result.stats.records_scanned, 4);
    assert_eq!(result.stats.rows_accepted, 2);
    assert_eq!(result.stats.rows_rejected, 2);
    assert_eq!(result.frame.row_count(), result.stats.rows_accepted);
    assert_eq!(result.stats.acceptance_rate(), 50.0);
}

#[test]
fn test_csv_source_end_to_end() {
    let data = "name,joined,score\nalice,2023-06-15 12:00:00,1.5\nbob,not-a-date,2.5\n";
    let source = CsvSource::from_reader(data.as_bytes()).unwrap();

    let schema = Schema::new()
        .with_column("joined", ValueType::DateTime)
        .unwrap()
        .with_column("score", ValueType::Float)
        .unwrap()
        .with_column("name", ValueType::Text)
        .unwrap();

    let result = Converter::new().convert(source, &schema).unwrap();

    assert_eq!(result.frame.row_count(), 2);
    let names: Vec<&str> = result.frame.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["joined", "score", "name"]);
    assert!(!result.frame.value(0, "joined").unwrap().is_na());
    assert!(result.frame.value(1, "joined").unwrap().is_na());
    assert_eq!(result.stats.parse_failures, 1);
}

//! Per-type text parsing for cell values
//!
//! This module provides the parser contract shared by every value type and
//! one parser implementation per type. Dispatch happens statically from the
//! [`ValueType`] tag; no runtime type inspection is involved.

use crate::constants::{DATETIME_FORMAT_NAIVE, DATETIME_FORMAT_TZ};
use crate::value::{Value, ValueType};
use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Structured failure raised when raw text cannot be parsed as a value type
///
/// Cell-level and recoverable: the conversion engine substitutes NA for the
/// offending cell and continues. This error never crosses the public
/// conversion boundary.
#[derive(Debug, Clone, Error)]
#[error("cannot parse '{text}' as {expected}: {reason}")]
pub struct ParseFault {
    /// The raw text that failed to parse
    pub text: String,

    /// The value type the column expected
    pub expected: ValueType,

    /// Parser-specific failure description
    pub reason: String,
}

impl ParseFault {
    fn new(text: &str, expected: ValueType, reason: impl Into<String>) -> Self {
        Self {
            text: text.to_string(),
            expected,
            reason: reason.into(),
        }
    }
}

/// Contract shared by all value parsers
///
/// Implementations convert raw text into a concrete [`Value`] or fail with
/// a structured [`ParseFault`]. Parsers never see absent or NA-classified
/// text; that classification happens before any parser is invoked.
pub trait ParseValue {
    /// Parse raw text into a value
    fn parse(&self, raw: &str) -> Result<Value, ParseFault>;
}

/// Parser for boolean values
///
/// Accepts "true" and "false" in any letter case.
pub struct BoolParser;

impl ParseValue for BoolParser {
    fn parse(&self, raw: &str) -> Result<Value, ParseFault> {
        if raw.eq_ignore_ascii_case("true") {
            Ok(Value::Bool(true))
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(Value::Bool(false))
        } else {
            Err(ParseFault::new(
                raw,
                ValueType::Bool,
                "expected 'true' or 'false'",
            ))
        }
    }
}

/// Parser for 64-bit signed integers
pub struct IntParser;

impl ParseValue for IntParser {
    fn parse(&self, raw: &str) -> Result<Value, ParseFault> {
        raw.parse::<i64>()
            .map(Value::Int)
            .map_err(|e| ParseFault::new(raw, ValueType::Int, e.to_string()))
    }
}

/// Parser for 64-bit floating point numbers
pub struct FloatParser;

impl ParseValue for FloatParser {
    fn parse(&self, raw: &str) -> Result<Value, ParseFault> {
        raw.parse::<f64>()
            .map(Value::Float)
            .map_err(|e| ParseFault::new(raw, ValueType::Float, e.to_string()))
    }
}

/// Parser for text values; always succeeds
pub struct TextParser;

impl ParseValue for TextParser {
    fn parse(&self, raw: &str) -> Result<Value, ParseFault> {
        Ok(Value::Text(raw.to_string()))
    }
}

/// Parser for UTC timestamps
///
/// Tries the offset-carrying format first, then the naive format
/// interpreted as UTC.
pub struct DateTimeParser;

impl ParseValue for DateTimeParser {
    fn parse(&self, raw: &str) -> Result<Value, ParseFault> {
        if let Ok(dt) = DateTime::parse_from_str(raw, DATETIME_FORMAT_TZ) {
            return Ok(Value::DateTime(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT_NAIVE) {
            return Ok(Value::DateTime(DateTime::<Utc>::from_naive_utc_and_offset(
                naive, Utc,
            )));
        }
        Err(ParseFault::new(
            raw,
            ValueType::DateTime,
            format!(
                "expected '{DATETIME_FORMAT_NAIVE}' or '{DATETIME_FORMAT_TZ}'"
            ),
        ))
    }
}

impl ValueType {
    /// Parse raw text according to this value type
    ///
    /// Statically dispatches to the parser belonging to the type tag.
    pub fn parse_text(self, raw: &str) -> Result<Value, ParseFault> {
        match self {
            ValueType::Bool => BoolParser.parse(raw),
            ValueType::Int => IntParser.parse(raw),
            ValueType::Float => FloatParser.parse(raw),
            ValueType::Text => TextParser.parse(raw),
            ValueType::DateTime => DateTimeParser.parse(raw),
        }
    }
}

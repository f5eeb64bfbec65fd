//! Typed value model for converted cells
//!
//! This module defines the closed set of cell value types produced by the
//! conversion engine, including the NA sentinel used for absent or unusable
//! data. NA is a single distinguished value: it equals only itself and never
//! participates in ordering.

use crate::numeric::{self, Numeric};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Type tag identifying the value domain of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Boolean values ("true"/"false", case-insensitive)
    Bool,

    /// 64-bit signed integers
    Int,

    /// 64-bit floating point numbers
    Float,

    /// Arbitrary UTF-8 text
    Text,

    /// UTC timestamps
    DateTime,
}

impl ValueType {
    /// All supported value types
    pub fn all() -> [ValueType; 5] {
        [
            ValueType::Bool,
            ValueType::Int,
            ValueType::Float,
            ValueType::Text,
            ValueType::DateTime,
        ]
    }

    /// Lowercase name used in diagnostics and error messages
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Text => "text",
            ValueType::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single converted cell value
///
/// Either a concrete value belonging to one of the closed set of value
/// types, or the NA sentinel representing "absent or unusable". NA is never
/// a parse-in-progress state: the engine classifies a cell as NA before any
/// parser runs, or substitutes NA after a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// The NA sentinel: absent or unusable data
    Na,

    /// Boolean value
    Bool(bool),

    /// Integer value
    Int(i64),

    /// Floating point value
    Float(f64),

    /// Text value
    Text(String),

    /// UTC timestamp value
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Check whether this value is the NA sentinel
    pub fn is_na(&self) -> bool {
        matches!(self, Value::Na)
    }

    /// The type tag of a concrete value, or `None` for NA
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Na => None,
            Value::Bool(_) => Some(ValueType::Bool),
            Value::Int(_) => Some(ValueType::Int),
            Value::Float(_) => Some(ValueType::Float),
            Value::Text(_) => Some(ValueType::Text),
            Value::DateTime(_) => Some(ValueType::DateTime),
        }
    }

    /// Check whether this value can participate in ordering
    ///
    /// NA and float NaN are not orderable. The conversion engine demotes
    /// parser results that fail this check to NA.
    pub fn is_orderable(&self) -> bool {
        match self {
            Value::Na => false,
            Value::Float(f) => !f.is_nan(),
            _ => true,
        }
    }

    /// Numeric view of this value widened to `f64`, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(numeric::convert(*n)),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Narrow a numeric value into the requested representation
    ///
    /// Returns `None` for non-numeric values. Narrowing semantics are those
    /// of [`crate::numeric`]: truncation toward zero with saturation.
    pub fn to_numeric<T: Numeric>(&self) -> Option<T> {
        self.as_f64().map(T::from_wide)
    }

    /// Borrow the text of a [`Value::Text`] value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Boolean view of this value, if it is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Timestamp view of this value, if it is one
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // NA equals only itself
            (Value::Na, Value::Na) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            // Mixed numeric representations compare through the wide intermediate
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                numeric::convert::<i64, f64>(*a) == *b
            }
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            // NA does not participate in ordering
            (Value::Na, _) | (_, Value::Na) => None,
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => numeric::convert::<i64, f64>(*a).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&numeric::convert::<i64, f64>(*b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Na => f.write_str("NA"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

//! Dynamically-typed values with a closed set of kinds.
//!
//! `Value` gives kind-based cases (`is`) something to dispatch on: every
//! variant maps to exactly one `ValueKind`, and kind tests compare those
//! tags for equality. `Value::Void` stands in for an absent value and has a
//! kind of its own, so kind tests on it simply fail to match.

mod decimal;

use std::fmt;

pub use decimal::{Decimal, DecimalError};

use crate::case::Tagged;

/// A value of one of the supported kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
    /// Fixed-point decimal; compares numerically.
    Decimal(Decimal),
    List(Vec<Value>),
    /// No value.
    Void,
}

/// Tag naming the variant of a `Value`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    Bool,
    Char,
    Str,
    Decimal,
    List,
    Void,
}

impl ValueKind {
    /// Lowercase name of the kind, as shown in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Char => "char",
            ValueKind::Str => "str",
            ValueKind::Decimal => "decimal",
            ValueKind::List => "list",
            ValueKind::Void => "void",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Char(_) => ValueKind::Char,
            Value::Str(_) => ValueKind::Str,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::List(_) => ValueKind::List,
            Value::Void => ValueKind::Void,
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }
}

impl Tagged for Value {
    type Tag = ValueKind;

    #[inline]
    fn tag(&self) -> ValueKind {
        self.kind()
    }
}

// Conversions

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Void
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Void => f.write_str("void"),
        }
    }
}

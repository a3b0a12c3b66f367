//! Descriptions of the columns a record is decoded from.

use core::fmt;

use crate::decode::DecodeError;

/// The semantic type a column is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Raw column text, kept verbatim.
    Text,
    /// A boolean literal.
    Boolean,
    /// A base-10 signed 64-bit integer.
    Integer,
    /// A 64-bit floating point number.
    Decimal,
    /// A type with no conversion rule, named by its Rust spelling.
    ///
    /// Shapes containing this kind cannot be decoded into.
    Unsupported(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Boolean => f.write_str("boolean"),
            Self::Integer => f.write_str("integer"),
            Self::Decimal => f.write_str("decimal"),
            Self::Unsupported(name) => write!(f, "unsupported ({name})"),
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// The ordered columns of a record.
///
/// Columns are matched to fields strictly by position: the first token of a
/// row is decoded into the first descriptor, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape(&'static [FieldDescriptor]);

impl Shape {
    pub const fn new(fields: &'static [FieldDescriptor]) -> Self {
        Self(fields)
    }

    /// Number of columns in a row of this shape.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&'static FieldDescriptor> {
        self.0.get(index)
    }

    pub fn fields(&self) -> core::slice::Iter<'static, FieldDescriptor> {
        self.0.iter()
    }

    /// Check every column has a conversion rule, before any data is read.
    pub fn validate(&self) -> Result<(), DecodeError> {
        match self.fields().find_map(|f| match f.kind {
            FieldKind::Unsupported(kind) => Some(kind),
            _ => None,
        }) {
            Some(kind) => Err(DecodeError::UnsupportedFieldKind { kind }),
            None => Ok(()),
        }
    }
}

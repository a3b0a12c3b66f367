//! Decoding rows into records.

use thiserror::Error;

use crate::{record::Record, row::RowSource, shape::FieldKind};

/// Errors occurring while decoding a row.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The row source is exhausted.
    ///
    /// This is the expected way for a decode loop to end, not a failure.
    #[error("No rows remain.")]
    EndOfInput,
    /// The row and the record have different numbers of columns.
    #[error("Row has {found} fields, expected {expected}.")]
    FieldCountMismatch { expected: usize, found: usize },
    /// A token could not be converted to its column's kind.
    #[error("Cannot convert {raw:?} to {kind} for field `{field}`.")]
    FieldConversion {
        field: &'static str,
        raw: String,
        kind: FieldKind,
    },
    /// The record declares a column with no conversion rule.
    #[error("Unsupported field type: {kind}.")]
    UnsupportedFieldKind { kind: &'static str },
    /// An error from the row source, such as invalid UTF-8.
    #[error(transparent)]
    Source(#[from] csv::Error),
}

impl DecodeError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

/// A token converted to its column's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
}

/// Decode the next row from a source into a record.
///
/// Columns are matched to the record's [`Shape`](crate::shape::Shape) by
/// position. The whole row is converted before any field is set, so on error
/// the record is left untouched.
///
/// Returns [`DecodeError::EndOfInput`] once the source is exhausted.
pub fn decode<R: Record>(
    source: &mut (impl RowSource + ?Sized),
    target: &mut R,
) -> Result<(), DecodeError> {
    let row = source.next_row().ok_or(DecodeError::EndOfInput)??;

    let shape = R::SHAPE;

    if row.len() != shape.len() {
        Err(DecodeError::FieldCountMismatch {
            expected: shape.len(),
            found: row.len(),
        })?;
    }

    let values = shape
        .fields()
        .zip(row.iter())
        .map(|(field, raw)| convert(field.kind, field.name, raw))
        .collect::<Result<Vec<_>, _>>()?;

    for (index, value) in values.into_iter().enumerate() {
        match value {
            FieldValue::Text(v) => target.set_text(index, v),
            FieldValue::Boolean(v) => target.set_boolean(index, v),
            FieldValue::Integer(v) => target.set_integer(index, v),
            FieldValue::Decimal(v) => target.set_decimal(index, v),
        }
    }

    Ok(())
}

/// Convert a single token for the named field.
///
/// Text is kept verbatim. Integers and decimals may be surrounded by
/// whitespace. Booleans accept `true`, `t`, `1`, `false`, `f` and `0`, in any
/// case.
pub fn convert(kind: FieldKind, field: &'static str, raw: &str) -> Result<FieldValue, DecodeError> {
    let value = match kind {
        FieldKind::Text => Some(FieldValue::Text(raw.to_owned())),
        FieldKind::Boolean => parse_boolean(raw).map(FieldValue::Boolean),
        FieldKind::Integer => raw.trim().parse().ok().map(FieldValue::Integer),
        FieldKind::Decimal => raw.trim().parse().ok().map(FieldValue::Decimal),
        FieldKind::Unsupported(kind) => Err(DecodeError::UnsupportedFieldKind { kind })?,
    };

    value.ok_or_else(|| DecodeError::FieldConversion {
        field,
        raw: raw.to_owned(),
        kind,
    })
}

fn parse_boolean(raw: &str) -> Option<bool> {
    const TRUE: [&str; 3] = ["true", "t", "1"];
    const FALSE: [&str; 3] = ["false", "f", "0"];

    if TRUE.iter().any(|l| raw.eq_ignore_ascii_case(l)) {
        Some(true)
    } else if FALSE.iter().any(|l| raw.eq_ignore_ascii_case(l)) {
        Some(false)
    } else {
        None
    }
}

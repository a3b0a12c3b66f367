//! Receivers for decoded rows.
//!
//! A type implementing [`Record`] declares its [`Shape`] and accepts converted
//! column values through one setter per [`FieldKind`](crate::shape::FieldKind).
//! In most cases this trait can be derived. See the
//! [`Record`](macro@Record) macro for details.

use crate::shape::Shape;

/// Derive [`Record`] for a struct with named fields.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Fields are mapped to columns in declaration order. Fields of type
/// `String`, `bool`, `i64` and `f64` are decoded as text, boolean, integer and
/// decimal columns respectively.
///
/// ```
/// #[derive(Debug, Default, Record)]
/// struct Set {
///     exercise: String,
///     reps: i64,
///     weight: f64,
/// }
/// ```
///
/// To give a column a different name (used in error messages), add the
/// `column(name = "...")` attribute. To leave a field out of the shape
/// entirely, add `column(skip)`; it keeps whatever value it had before
/// decoding.
///
/// ```
/// #[derive(Debug, Default, Record)]
/// struct Set {
///     #[column(name = "Exercise")]
///     exercise: String,
///     #[column(skip)]
///     source_line: usize,
///     reps: i64,
/// }
/// ```
///
/// A field of any other type is declared with
/// [`FieldKind::Unsupported`](crate::shape::FieldKind::Unsupported), and
/// decoding into the struct will fail. Use [`Shape::validate`] to catch this
/// before reading any data.
#[cfg(feature = "derive")]
pub use fitbod_csv_derive::Record;

/// Receive converted column values for a row.
///
/// Each setter is called with the column's position in [`Record::SHAPE`], and
/// is only called for positions declared with the matching kind. Every column
/// of a row is set exactly once, in order, after the whole row has converted
/// successfully.
///
/// The default implementation of each method ignores received values.
///
/// See the [`Record`](macro@Record) derive macro for an automatic
/// implementation of this trait.
#[allow(unused_variables)]
pub trait Record {
    /// The ordered columns of this record.
    ///
    /// Every kind in `SHAPE` must have its setter implemented. A column whose
    /// setter is left as the default still decodes successfully, but its
    /// value is discarded.
    const SHAPE: Shape;

    /// Set a text column.
    fn set_text(&mut self, index: usize, value: String) {}
    /// Set a boolean column.
    fn set_boolean(&mut self, index: usize, value: bool) {}
    /// Set an integer column.
    fn set_integer(&mut self, index: usize, value: i64) {}
    /// Set a decimal column.
    fn set_decimal(&mut self, index: usize, value: f64) {}
}

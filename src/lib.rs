//! A positional, typed row decoder for Fitbod workout exports.
//!
//! Each call to [`decode`](decode::decode) pulls one row of delimited text from
//! a [`RowSource`](row::RowSource) and writes its columns, by position, into a
//! type implementing [`Record`](record::Record). The record's
//! [`Shape`](shape::Shape) declares which [`FieldKind`](shape::FieldKind) each
//! column is converted to.
//!
//! Most users should begin with the [`Record`](macro@record::Record) derive
//! macro and the [`workout`] module, which describes the export produced by
//! Fitbod.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable the derive macro and the [`workout`] record (default).

// Lets derived code name this crate by its absolute path.
extern crate self as fitbod_csv;

pub mod decode;
pub mod record;
pub mod row;
pub mod shape;
#[cfg(feature = "derive")]
pub mod workout;

pub use decode::{DecodeError, decode};

//! Sources of delimited rows.

use std::{fs::File, io::Read, path::Path};

use csv::{Reader, ReaderBuilder};

/// One line of delimited input, split into ordered tokens.
pub type Row = csv::StringRecord;

/// A stateful producer of rows.
pub trait RowSource {
    /// Yield the next row, or `None` once input is exhausted.
    fn next_row(&mut self) -> Option<Result<Row, csv::Error>>;
}

impl<R: Read> RowSource for Reader<R> {
    fn next_row(&mut self) -> Option<Result<Row, csv::Error>> {
        let mut row = Row::new();
        match self.read_record(&mut row) {
            Ok(true) => Some(Ok(row)),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// Build a source over a single line of text.
///
/// The line is split on `delimiter`, honouring double-quote enclosure and
/// doubled-quote escaping. Rows of any length are yielded; checking arity
/// against a shape is left to the decoder.
pub fn from_line(line: &str, delimiter: u8) -> Reader<&[u8]> {
    from_bytes(line.as_bytes(), delimiter)
}

/// Build a source over a single line of raw bytes.
///
/// As [`from_line`], except that a line which is not valid UTF-8 is yielded
/// as an error for that row alone.
pub fn from_bytes(line: &[u8], delimiter: u8) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(line)
}

/// Build a source over a whole file, skipping its header line.
///
/// Unlike scanning the file line-by-line, this accepts quoted tokens spanning
/// several lines.
pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Reader<File>, csv::Error> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
}

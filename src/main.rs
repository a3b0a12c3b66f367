use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use fitbod_csv::{DecodeError, decode, record::Record, row, workout::WorkoutRecord};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Print the sets logged in a Fitbod workout export.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the exported CSV file.
    #[arg(default_value = "./data/WorkoutExport.csv")]
    path: PathBuf,
    /// Column delimiter, a single ASCII character.
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
    /// Warn about and skip malformed rows instead of stopping at the first.
    #[arg(long)]
    skip_invalid: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("expected a single ASCII character, found {s:?}")),
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error("Record shape cannot be decoded: {0}")]
    Shape(#[source] DecodeError),
    #[error("Error opening file: {0}")]
    Open(#[source] io::Error),
    #[error("Error reading file after {printed} records: {source}")]
    Scan {
        printed: usize,
        #[source]
        source: io::Error,
    },
    #[error("Line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    exit_code(&run(&args))
}

/// Report the outcome of a run and choose the process exit status.
///
/// Open and scan failures are reported without failing the process. Any
/// other error, including the first malformed row, is fatal.
fn exit_code(result: &Result<usize, AppError>) -> ExitCode {
    match result {
        Ok(count) => {
            debug!(count, "finished decoding");
            ExitCode::SUCCESS
        }
        Err(err @ AppError::Open(_)) => {
            error!("{err}");
            ExitCode::SUCCESS
        }
        Err(err @ AppError::Scan { .. }) => {
            warn!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<usize, AppError> {
    WorkoutRecord::SHAPE.validate().map_err(AppError::Shape)?;

    let file = File::open(&args.path).map_err(AppError::Open)?;
    info!(path = %args.path.display(), "reading workout export");

    print_records(BufReader::new(file), args)
}

/// Decode and print every record after the header line, returning how many
/// were printed.
///
/// Lines are split as raw bytes, so a line that is not valid UTF-8 fails to
/// decode on its own rather than ending the scan.
fn print_records(input: impl BufRead, args: &Args) -> Result<usize, AppError> {
    let mut printed = 0;

    // Line numbers are 1-based; line 1 is the header.
    for (line, bytes) in (1..).zip(input.split(b'\n')) {
        let mut bytes = bytes.map_err(|source| AppError::Scan { printed, source })?;

        if line == 1 {
            continue;
        }

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let mut rows = row::from_bytes(&bytes, args.delimiter);

        loop {
            let mut record = WorkoutRecord::default();

            match decode(&mut rows, &mut record) {
                Ok(()) => {
                    println!("{record}");
                    printed += 1;
                }
                Err(DecodeError::EndOfInput) => break,
                Err(source) if args.skip_invalid => {
                    warn!(line, %source, "skipping malformed row");
                    break;
                }
                Err(source) => Err(AppError::Decode { line, source })?,
            }
        }
    }

    Ok(printed)
}

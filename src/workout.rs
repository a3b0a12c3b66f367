//! The record shape of a Fitbod workout export.
//!
//! _Requires Cargo feature `derive`._

use core::fmt;

use crate::record::Record;

/// One logged set from a Fitbod export.
///
/// Columns are declared in export order. Their names match the export's
/// header line.
#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct WorkoutRecord {
    #[column(name = "Date")]
    pub timestamp: String,
    #[column(name = "Exercise")]
    pub exercise: String,
    #[column(name = "Reps")]
    pub reps: i64,
    #[column(name = "Weight(kg)")]
    pub weight: f64,
    #[column(name = "Duration(s)")]
    pub duration: f64,
    #[column(name = "Distance(m)")]
    pub distance: f64,
    #[column(name = "Incline")]
    pub incline: f64,
    #[column(name = "Resistance")]
    pub resistance: f64,
    #[column(name = "isWarmup")]
    pub is_warmup: bool,
    #[column(name = "Note")]
    pub note: String,
    #[column(name = "multiplier")]
    pub multiplier: f64,
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} reps={} weight={} duration={} distance={} incline={} resistance={} warmup={} multiplier={} note={:?}",
            self.timestamp,
            self.exercise,
            self.reps,
            self.weight,
            self.duration,
            self.distance,
            self.incline,
            self.resistance,
            self.is_warmup,
            self.multiplier,
            self.note,
        )
    }
}

//! Harmonizer
//!
//! Applies a fixed interval list to any tonic.

use crate::interval::Interval;
use crate::note::Pitch;

/// An interval list waiting for a tonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transposer {
    intervals: Vec<Interval>,
}

impl Transposer {
    /// Transposer for the given intervals.
    pub fn new(intervals: Vec<Interval>) -> Self {
        Transposer { intervals }
    }

    /// The intervals applied by [`apply`](Self::apply).
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Notes of the interval list above `tonic`. A pitch-class tonic gives
    /// pitch classes; a tonic with an octave gives pitches.
    ///
    /// ```
    /// use tonality::{Interval, Pitch, Transposer};
    ///
    /// let triad: Vec<Interval> = ["1P", "3m", "5P"]
    ///     .iter()
    ///     .filter_map(|i| Interval::parse(i))
    ///     .collect();
    /// let minor = Transposer::new(triad);
    /// let notes: Vec<String> = minor
    ///     .apply(&Pitch::parse("Db3").unwrap())
    ///     .iter()
    ///     .map(|p| p.to_string())
    ///     .collect();
    /// assert_eq!(notes, ["Db3", "Fb3", "Ab3"]);
    /// ```
    pub fn apply(&self, tonic: &Pitch) -> Vec<Pitch> {
        self.intervals.iter().map(|ivl| tonic.transpose(ivl)).collect()
    }
}

//! Parse errors for the string forms of notes, intervals and chromas.
//!
//! The `parse` constructors return `Option`; this type only backs the
//! `FromStr` and serde implementations.

use thiserror::Error;

/// A string that does not name a note, interval or chroma.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a note name such as `C#4` or `Bb`.
    #[error("`{0}` is not a valid note name")]
    Note(String),

    /// Not an interval name such as `3M` or `-9m`.
    #[error("`{0}` is not a valid interval name")]
    Interval(String),

    /// Not a 12-digit binary chroma such as `101011010101`.
    #[error("`{0}` is not a valid chroma")]
    Chroma(String),
}

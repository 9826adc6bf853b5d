//! # tonality
//!
//! Music-theory arithmetic: parse and transpose notes, add and invert
//! intervals, treat chords and scales as 12-bit pitch-class sets, and name
//! a set of notes against a chord or scale dictionary.
//!
//! ## Example
//! ```rust
//! use tonality::{chord, scale, Dictionary, Interval, Pitch};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Notes and intervals
//!     let c4: Pitch = "C4".parse()?;
//!     let third: Interval = "3M".parse()?;
//!     assert_eq!(c4.transpose(&third).to_string(), "E4");
//!
//!     // 2) Dictionaries built from the bundled tables
//!     let chords = Dictionary::chords();
//!     let scales = Dictionary::scales();
//!
//!     // 3) Name some notes
//!     for name in chord::detect(&chords, ["E", "C", "A", "G"]) {
//!         println!("{name}");
//!     }
//!     let modes = scale::modes(&scales, "C major", None);
//!     assert_eq!(modes[4].as_deref(), Some("G mixolydian"));
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Note and interval value types.
pub use coord::Coordinate;
pub use interval::{Interval, Quality};
pub use note::{Letter, Pitch};

/// Pitch-class sets.
pub use pcset::{Chroma, Chromatic};

/// Name registry, detection and transposition.
pub use detector::{Detection, Detector};
pub use dictionary::{Dictionary, DictionaryBuilder, DictionaryError, Entry, Named};
pub use error::ParseError;
pub use harmonizer::Transposer;

/// Line-of-fifths coordinates.
pub mod coord;

/// Note names.
pub mod note;

/// Interval names and arithmetic.
pub mod interval;

/// Pitch-class sets.
pub mod pcset;

/// Name registry indexed by chroma.
pub mod dictionary;

/// Bundled chord and scale tables.
pub mod data;

/// Interval lists applied to a tonic.
pub mod harmonizer;

/// Chroma matching.
pub mod detector;

/// Scale queries.
pub mod scale;

/// Chord queries.
pub mod chord;

/// Parse errors.
pub mod error;

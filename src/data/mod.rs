//! Static Tables
//!
//! Built-in chord and scale definitions. Each type table holds
//! `(name, space-separated intervals)`, each alias table `(alias, name)`.
//! Tables are loaded by [`Dictionary::chords`](crate::Dictionary::chords)
//! and [`Dictionary::scales`](crate::Dictionary::scales).

mod chords;
mod scales;

pub use chords::{CHORDS, CHORD_ALIASES};
pub use scales::{SCALES, SCALE_ALIASES};

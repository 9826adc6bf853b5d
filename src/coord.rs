//! Coordinates
//!
//! Line-of-fifths encoding shared by notes and intervals. A coordinate counts
//! perfect fifths and octaves away from C4 (or from the unison), so every
//! transposition and interval sum is plain integer addition.

use std::ops::{Add, Neg, Sub};

/// Fifths from C for each letter step (C D E F G A B).
const FIFTHS: [i32; 7] = [0, 2, 4, -1, 1, 3, 5];

/// Octaves swallowed by the fifths of each letter step: `floor(fifths * 7 / 12)`.
const STEPS_TO_OCTS: [i32; 7] = [0, 1, 2, -1, 0, 1, 2];

/// Inverse of `FIFTHS`, indexed by `(fifths + 1) mod 7`.
const FIFTHS_TO_STEPS: [usize; 7] = [3, 0, 4, 1, 5, 2, 6];

/// A point on the line of fifths.
///
/// `octaves` is `None` for pitch classes, which have no register.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Number of perfect fifths.
    pub fifths: i32,
    /// Number of octaves, absent for pitch classes.
    pub octaves: Option<i32>,
}

impl Coordinate {
    /// Coordinate with both components.
    pub const fn new(fifths: i32, octaves: i32) -> Self {
        Coordinate {
            fifths,
            octaves: Some(octaves),
        }
    }

    /// Coordinate without an octave component.
    pub const fn pitch_class(fifths: i32) -> Self {
        Coordinate {
            fifths,
            octaves: None,
        }
    }

    /// Size in semitones; a missing octave component counts as zero.
    pub fn semitones(&self) -> i32 {
        7 * self.fifths + 12 * self.octaves.unwrap_or(0)
    }

    /// Pitch class number (0..12) reached by this coordinate.
    pub fn chroma(&self) -> u8 {
        (7 * self.fifths).rem_euclid(12) as u8
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate {
            fifths: self.fifths + rhs.fifths,
            octaves: self.octaves.zip(rhs.octaves).map(|(a, b)| a + b),
        }
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        self + (-rhs)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        Coordinate {
            fifths: -self.fifths,
            octaves: self.octaves.map(|o| -o),
        }
    }
}

/// Encode a letter step (0..7), alteration and optional octave.
pub(crate) fn encode(step: usize, alt: i32, oct: Option<i32>) -> Coordinate {
    let fifths = FIFTHS[step] + 7 * alt;
    Coordinate {
        fifths,
        octaves: oct.map(|o| o - STEPS_TO_OCTS[step] - 4 * alt),
    }
}

/// Decode a coordinate back into `(step, alt, octave)`.
pub(crate) fn decode(coord: Coordinate) -> (usize, i32, Option<i32>) {
    let f = coord.fifths;
    let step = FIFTHS_TO_STEPS[(f + 1).rem_euclid(7) as usize];
    let alt = (f + 1).div_euclid(7);
    let oct = coord.octaves.map(|o| o + 4 * alt + STEPS_TO_OCTS[step]);
    (step, alt, oct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_naturals_on_the_line_of_fifths() {
        // C4, D4, F4
        assert_eq!(encode(0, 0, Some(4)), Coordinate::new(0, 4));
        assert_eq!(encode(1, 0, Some(4)), Coordinate::new(2, 3));
        assert_eq!(encode(3, 0, Some(4)), Coordinate::new(-1, 5));
        assert_eq!(encode(4, 0, None), Coordinate::pitch_class(1));
    }

    #[test]
    fn decode_inverts_encode() {
        for step in 0..7 {
            for alt in -3..=3 {
                for oct in [None, Some(-1), Some(0), Some(4), Some(9)] {
                    assert_eq!(decode(encode(step, alt, oct)), (step, alt, oct));
                }
            }
        }
    }

    #[test]
    fn semitones_and_chroma() {
        // major third: four fifths down two octaves
        let third = Coordinate::new(4, -2);
        assert_eq!(third.semitones(), 4);
        assert_eq!(third.chroma(), 4);
        // Bb as a pitch class
        assert_eq!(Coordinate::pitch_class(-2).chroma(), 10);
    }

    #[test]
    fn arithmetic_drops_missing_octaves() {
        let a = Coordinate::new(1, 0);
        let b = Coordinate::pitch_class(2);
        assert_eq!(a + b, Coordinate::pitch_class(3));
        assert_eq!(a - a, Coordinate::new(0, 0));
        assert_eq!(-a, Coordinate::new(-1, 0));
    }
}

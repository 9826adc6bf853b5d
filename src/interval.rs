//! Interval Algebra
//!
//! Intervals are `(number, quality)` pairs such as `3M` or `-9m`. All
//! arithmetic goes through [`Coordinate`]s, so sums are exact and associative.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::{self, Coordinate};
use crate::error::ParseError;
use crate::note::Pitch;

/// Largest interval number and quality repetition accepted by
/// [`Interval::parse`] and [`Interval::new`].
pub const MAX_INTERVAL_COMPONENT: u32 = 1000;

/// Interval quality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quality {
    /// Diminished, possibly several times (`d`, `dd`, ...).
    Diminished(u32),
    /// Minor (`m`).
    Minor,
    /// Perfect (`P`).
    Perfect,
    /// Major (`M`).
    Major,
    /// Augmented, possibly several times (`A`, `AA`, ...).
    Augmented(u32),
}

impl Quality {
    fn parse(s: &str) -> Option<Quality> {
        match s {
            "P" => Some(Quality::Perfect),
            "M" => Some(Quality::Major),
            "m" => Some(Quality::Minor),
            _ => {
                let first = s.bytes().next()?;
                if !s.bytes().all(|b| b == first) {
                    return None;
                }
                let count = u32::try_from(s.len())
                    .ok()
                    .filter(|&n| n <= MAX_INTERVAL_COMPONENT)?;
                match first {
                    b'd' => Some(Quality::Diminished(count)),
                    b'A' => Some(Quality::Augmented(count)),
                    _ => None,
                }
            }
        }
    }

    /// Quality reached by an alteration on a perfect-type or major-type step.
    fn from_alt(perfectable: bool, alt: i32) -> Quality {
        match (perfectable, alt) {
            (true, 0) => Quality::Perfect,
            (false, 0) => Quality::Major,
            (false, -1) => Quality::Minor,
            (_, a) if a > 0 => Quality::Augmented(a.unsigned_abs()),
            (true, a) => Quality::Diminished(a.unsigned_abs()),
            (false, a) => Quality::Diminished((a + 1).unsigned_abs()),
        }
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Quality::Diminished(n) => f.write_str(&"d".repeat(n as usize)),
            Quality::Minor => f.write_str("m"),
            Quality::Perfect => f.write_str("P"),
            Quality::Major => f.write_str("M"),
            Quality::Augmented(n) => f.write_str(&"A".repeat(n as usize)),
        }
    }
}

/// Names of the twelve simple ascending intervals by semitone size.
const SEMITONE_NUMBERS: [i32; 12] = [1, 2, 2, 3, 3, 4, 5, 5, 6, 6, 7, 7];
const SEMITONE_QUALITIES: [Quality; 12] = [
    Quality::Perfect,
    Quality::Minor,
    Quality::Major,
    Quality::Minor,
    Quality::Major,
    Quality::Perfect,
    Quality::Diminished(1),
    Quality::Perfect,
    Quality::Minor,
    Quality::Major,
    Quality::Minor,
    Quality::Major,
];

/// A diatonic interval: signed number plus quality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    number: i32,
    quality: Quality,
}

impl Interval {
    /// Build an interval, rejecting number 0, numbers or repetitions beyond
    /// [`MAX_INTERVAL_COMPONENT`], and qualities that do not fit the number
    /// (`2P`, `5M`, `Diminished(0)`).
    ///
    /// A descending unison is the ascending unison of opposite alteration,
    /// so `-1P` is built as `1P` and `-1A` as `1d`.
    pub fn new(number: i32, quality: Quality) -> Option<Interval> {
        if number == 0 || number.unsigned_abs() > MAX_INTERVAL_COMPONENT {
            return None;
        }
        let ivl = Interval { number, quality };
        let fits = match quality {
            Quality::Perfect => ivl.is_perfectable(),
            Quality::Major | Quality::Minor => !ivl.is_perfectable(),
            Quality::Diminished(n) | Quality::Augmented(n) => {
                n > 0 && n <= MAX_INTERVAL_COMPONENT
            }
        };
        fits.then(|| ivl.normalized())
    }

    /// Rewrite a descending unison in its ascending form.
    fn normalized(self) -> Interval {
        if self.number == -1 {
            Interval::decode(self.encode())
        } else {
            self
        }
    }

    /// Parse `3M`, `-9m`, `4AA`, or the quality-first forms `P5`, `M-3`.
    ///
    /// ```
    /// use tonality::Interval;
    ///
    /// assert_eq!(Interval::parse("P5"), Interval::parse("5P"));
    /// assert_eq!(Interval::parse("-10m").unwrap().semitones(), -15);
    /// assert!(Interval::parse("2P").is_none());
    /// ```
    pub fn parse(name: &str) -> Option<Interval> {
        let is_num = |c: char| c == '-' || c.is_ascii_digit();
        let split = name.find(|c: char| !is_num(c)).unwrap_or(name.len());
        let (number, quality) = if split > 0 {
            (&name[..split], &name[split..])
        } else {
            let split = name.find(is_num)?;
            (&name[split..], &name[..split])
        };
        Interval::new(parse_number(number)?, Quality::parse(quality)?)
    }

    /// Signed interval number (negative when descending).
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Interval quality.
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// True for descending intervals.
    pub fn is_descending(&self) -> bool {
        self.number < 0
    }

    /// True for intervals wider than an octave.
    pub fn is_compound(&self) -> bool {
        self.number.abs() > 8
    }

    fn step(&self) -> usize {
        ((self.number.unsigned_abs() - 1) % 7) as usize
    }

    fn octaves(&self) -> i32 {
        ((self.number.unsigned_abs() - 1) / 7) as i32
    }

    fn direction(&self) -> i32 {
        self.number.signum()
    }

    fn is_perfectable(&self) -> bool {
        matches!(self.step(), 0 | 3 | 4)
    }

    fn alt(&self) -> i32 {
        match (self.quality, self.is_perfectable()) {
            (Quality::Perfect | Quality::Major, _) => 0,
            (Quality::Minor, _) => -1,
            (Quality::Augmented(n), _) => n as i32,
            (Quality::Diminished(n), true) => -(n as i32),
            (Quality::Diminished(n), false) => -(n as i32) - 1,
        }
    }

    /// Line-of-fifths coordinate; descending intervals negate both components.
    pub fn encode(&self) -> Coordinate {
        let c = coord::encode(self.step(), self.alt(), Some(self.octaves()));
        if self.is_descending() {
            -c
        } else {
            c
        }
    }

    /// Interval at a coordinate. A missing octave component counts as zero.
    ///
    /// Direction follows the diatonic step count of the coordinate, so every
    /// interval survives `decode(encode(i))`.
    pub fn decode(coord: Coordinate) -> Interval {
        let c = Coordinate::new(coord.fifths, coord.octaves.unwrap_or(0));
        let diatonic = 4 * c.fifths + 7 * c.octaves.unwrap_or(0);
        let (c, dir) = if diatonic < 0 { (-c, -1) } else { (c, 1) };
        let (step, alt, _) = coord::decode(c);
        let number = dir * (diatonic.abs() + 1);
        Interval {
            number,
            quality: Quality::from_alt(matches!(step, 0 | 3 | 4), alt),
        }
    }

    /// Exact size in semitones.
    pub fn semitones(&self) -> i32 {
        self.encode().semitones()
    }

    /// Sum of two intervals.
    pub fn add(&self, other: &Interval) -> Interval {
        Interval::decode(self.encode() + other.encode())
    }

    /// Difference of two intervals.
    pub fn subtract(&self, other: &Interval) -> Interval {
        Interval::decode(self.encode() - other.encode())
    }

    /// Additive inverse: `a.add(&a.negate())` is the unison.
    pub fn negate(&self) -> Interval {
        Interval::decode(-self.encode())
    }

    /// Musical inversion within the octave (`3M` -> `6m`, `4P` -> `5P`),
    /// keeping direction and compound octaves.
    pub fn invert(&self) -> Interval {
        let step = (7 - self.step()) % 7;
        let alt = if self.is_perfectable() {
            -self.alt()
        } else {
            -(self.alt() + 1)
        };
        Interval {
            number: self.direction() * (step as i32 + 1 + 7 * self.octaves()),
            quality: Quality::from_alt(matches!(step, 0 | 3 | 4), alt),
        }
    }

    /// Reduce to a simple interval (`9M` -> `2M`, `8P` -> `1P`), keeping
    /// quality and direction. Descending octaves reduce to ascending unisons
    /// (`-8P` -> `1P`, `-8A` -> `1d`).
    pub fn simplify(&self) -> Interval {
        Interval {
            number: self.direction() * (self.step() as i32 + 1),
            quality: self.quality,
        }
        .normalized()
    }

    /// The conventional interval name for a semitone count.
    ///
    /// ```
    /// use tonality::Interval;
    ///
    /// assert_eq!(Interval::from_semitones(6).to_string(), "5d");
    /// assert_eq!(Interval::from_semitones(-14).to_string(), "-9M");
    /// ```
    pub fn from_semitones(semitones: i32) -> Interval {
        let dir = if semitones < 0 { -1 } else { 1 };
        let n = semitones.abs();
        let c = (n % 12) as usize;
        Interval {
            number: dir * (SEMITONE_NUMBERS[c] + 7 * (n / 12)),
            quality: SEMITONE_QUALITIES[c],
        }
    }

    /// Interval from one note to another. Between pitch classes the result
    /// spans less than an octave upward; between pitches it is signed.
    pub fn between(from: &Pitch, to: &Pitch) -> Interval {
        let (a, b) = (from.encode(), to.encode());
        let fifths = b.fifths - a.fifths;
        let octaves = match (a.octaves, b.octaves) {
            (Some(x), Some(y)) => y - x,
            _ => -(fifths * 7).div_euclid(12),
        };
        Interval::decode(Coordinate::new(fifths, octaves))
    }
}

fn parse_number(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.quality)
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s).ok_or_else(|| ParseError::Interval(s.to_string()))
    }
}

impl TryFrom<String> for Interval {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Interval> for String {
    fn from(i: Interval) -> String {
        i.to_string()
    }
}

//! Note Codec
//!
//! Parsing, rendering and line-of-fifths encoding of note names such as
//! `C4`, `F#`, `Bbb-1` or `gx5`.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::{self, Coordinate};
use crate::error::ParseError;
use crate::interval::Interval;

/// Largest accidental run and octave magnitude accepted by [`Pitch::parse`].
pub const MAX_NOTE_COMPONENT: i32 = 1000;

/// Natural note letters in step order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    /// C, step 0
    C,
    /// D, step 1
    D,
    /// E, step 2
    E,
    /// F, step 3
    F,
    /// G, step 4
    G,
    /// A, step 5
    A,
    /// B, step 6
    B,
}

const LETTERS: [Letter; 7] = [
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
];

impl Letter {
    /// Diatonic step index (C = 0 .. B = 6).
    pub const fn step(self) -> usize {
        self as usize
    }

    /// Letter for a step index, wrapping modulo 7.
    pub const fn from_step(step: usize) -> Letter {
        LETTERS[step % 7]
    }

    fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A spelled pitch: letter, accidental in semitones and an optional octave.
///
/// Without an octave the value is a pitch class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    letter: Letter,
    accidental: i32,
    octave: Option<i32>,
}

impl Pitch {
    /// Build a pitch from its parts. Arithmetic stays exact for parts within
    /// [`MAX_NOTE_COMPONENT`].
    pub const fn new(letter: Letter, accidental: i32, octave: Option<i32>) -> Self {
        Pitch {
            letter,
            accidental,
            octave,
        }
    }

    /// Parse a note name. Returns `None` for anything outside
    /// `[A-Ga-g](#+|b+|x+)?(-?\d+)?`, or when the accidental run or the
    /// octave exceeds [`MAX_NOTE_COMPONENT`].
    ///
    /// ```
    /// use tonality::Pitch;
    ///
    /// let p = Pitch::parse("Eb4").unwrap();
    /// assert_eq!(p.accidental(), -1);
    /// assert_eq!(p.octave(), Some(4));
    /// assert!(Pitch::parse("H5").is_none());
    /// ```
    pub fn parse(name: &str) -> Option<Pitch> {
        let letter = Letter::from_char(name.chars().next()?)?;
        // the letter is ASCII, so byte 1 starts the rest
        let rest = &name[1..];

        let symbol = rest.bytes().next().filter(|b| matches!(b, b'#' | b'b' | b'x'));
        let count = match symbol {
            Some(s) => rest.bytes().take_while(|&b| b == s).count(),
            None => 0,
        };
        if count > MAX_NOTE_COMPONENT as usize {
            return None;
        }
        let accidental = match symbol {
            Some(b'#') => count as i32,
            Some(b'b') => -(count as i32),
            Some(b'x') => 2 * count as i32,
            _ => 0,
        };

        let octave = parse_octave(&rest[count..])?;
        Some(Pitch::new(letter, accidental, octave))
    }

    /// Note letter.
    pub fn letter(&self) -> Letter {
        self.letter
    }

    /// Alteration in semitones (`#` = 1, `b` = -1).
    pub fn accidental(&self) -> i32 {
        self.accidental
    }

    /// Octave number, `None` for a pitch class.
    pub fn octave(&self) -> Option<i32> {
        self.octave
    }

    /// The same pitch without its octave.
    pub fn pitch_class(&self) -> Pitch {
        Pitch {
            octave: None,
            ..*self
        }
    }

    /// True when the pitch carries no octave.
    pub fn is_pitch_class(&self) -> bool {
        self.octave.is_none()
    }

    /// Line-of-fifths coordinate.
    pub fn encode(&self) -> Coordinate {
        coord::encode(self.letter.step(), self.accidental, self.octave)
    }

    /// Pitch at a coordinate. A coordinate without octaves decodes to a pitch class.
    pub fn decode(coord: Coordinate) -> Pitch {
        let (step, alt, oct) = coord::decode(coord);
        Pitch::new(Letter::from_step(step), alt, oct)
    }

    /// Pitch class number, C = 0 .. B = 11.
    pub fn chroma(&self) -> u8 {
        self.encode().chroma()
    }

    /// MIDI note number (C4 = 60), `None` for a pitch class.
    pub fn midi(&self) -> Option<i32> {
        self.octave?;
        Some(self.encode().semitones() + 12)
    }

    /// Frequency in Hz with A4 = 440, `None` for a pitch class.
    pub fn freq(&self) -> Option<f64> {
        self.midi()
            .map(|m| 440.0 * 2f64.powf((m as f64 - 69.0) / 12.0))
    }

    /// Spell a MIDI note number with sharps or flats.
    pub fn from_midi(midi: i32, sharps: bool) -> Pitch {
        const SHARPS: [(Letter, i32); 12] = [
            (Letter::C, 0),
            (Letter::C, 1),
            (Letter::D, 0),
            (Letter::D, 1),
            (Letter::E, 0),
            (Letter::F, 0),
            (Letter::F, 1),
            (Letter::G, 0),
            (Letter::G, 1),
            (Letter::A, 0),
            (Letter::A, 1),
            (Letter::B, 0),
        ];
        const FLATS: [(Letter, i32); 12] = [
            (Letter::C, 0),
            (Letter::D, -1),
            (Letter::D, 0),
            (Letter::E, -1),
            (Letter::E, 0),
            (Letter::F, 0),
            (Letter::G, -1),
            (Letter::G, 0),
            (Letter::A, -1),
            (Letter::A, 0),
            (Letter::B, -1),
            (Letter::B, 0),
        ];
        let table = if sharps { &SHARPS } else { &FLATS };
        let (letter, accidental) = table[midi.rem_euclid(12) as usize];
        Pitch::new(letter, accidental, Some(midi.div_euclid(12) - 1))
    }

    /// Transpose by an interval. Pitch classes stay pitch classes.
    ///
    /// ```
    /// use tonality::{Interval, Pitch};
    ///
    /// let ivl = Interval::parse("3m").unwrap();
    /// let eb = Pitch::parse("C4").unwrap().transpose(&ivl);
    /// assert_eq!(eb.to_string(), "Eb4");
    /// ```
    pub fn transpose(&self, interval: &Interval) -> Pitch {
        Pitch::decode(self.encode() + interval.encode())
    }
}

/// `Ok(None)`-style result for the octave suffix: `Some(None)` when empty,
/// `None` when malformed.
fn parse_octave(s: &str) -> Option<Option<i32>> {
    if s.is_empty() {
        return Some(None);
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse()
        .ok()
        .filter(|o: &i32| o.unsigned_abs() <= MAX_NOTE_COMPONENT as u32)
        .map(Some)
}

/// Render an alteration as `#`/`b` symbols.
pub(crate) fn accidental_symbols(alt: i32) -> String {
    let symbol = if alt < 0 { "b" } else { "#" };
    symbol.repeat(alt.unsigned_abs() as usize)
}

impl Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, accidental_symbols(self.accidental))?;
        if let Some(oct) = self.octave {
            write!(f, "{oct}")?;
        }
        Ok(())
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pitch::parse(s).ok_or_else(|| ParseError::Note(s.to_string()))
    }
}

impl TryFrom<String> for Pitch {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pitch> for String {
    fn from(p: Pitch) -> String {
        p.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> Pitch {
        Pitch::parse(name).unwrap()
    }

    #[test]
    fn parses_letters_accidentals_and_octaves() {
        assert_eq!(p("C4"), Pitch::new(Letter::C, 0, Some(4)));
        assert_eq!(p("f#"), Pitch::new(Letter::F, 1, None));
        assert_eq!(p("bb"), Pitch::new(Letter::B, -1, None));
        assert_eq!(p("Bbb-1"), Pitch::new(Letter::B, -2, Some(-1)));
        assert_eq!(p("Gx5"), Pitch::new(Letter::G, 2, Some(5)));
        assert_eq!(p("A###0"), Pitch::new(Letter::A, 3, Some(0)));
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "H5", "C#b", "C4x", "C+4", "C-", "Cb 4", "major", "é"] {
            assert_eq!(Pitch::parse(bad), None, "{bad}");
        }
        assert!(matches!("H".parse::<Pitch>(), Err(ParseError::Note(_))));
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert_eq!(Pitch::parse("C2147483647"), None);
        assert_eq!(Pitch::parse("C-99999999999"), None);
        assert_eq!(Pitch::parse(&format!("C{}4", "#".repeat(1001))), None);

        let high = p("C1000");
        assert_eq!(high.midi(), Some(12012));
        assert!(high.freq().is_some());
        let low = p(&format!("B{}-1000", "b".repeat(1000)));
        assert_eq!(low.accidental(), -1000);
        assert!(low.midi().is_some());
    }

    #[test]
    fn renders_with_sharps_and_flats() {
        assert_eq!(p("gx5").to_string(), "G##5");
        assert_eq!(p("ebb").to_string(), "Ebb");
        assert_eq!(p("C-1").to_string(), "C-1");
    }

    #[test]
    fn encode_decode_round_trip() {
        for letter in LETTERS {
            for acc in -3..=3 {
                for oct in [None, Some(-2), Some(0), Some(4), Some(8)] {
                    let pitch = Pitch::new(letter, acc, oct);
                    assert_eq!(Pitch::decode(pitch.encode()), pitch);
                }
            }
        }
    }

    #[test]
    fn midi_and_frequency() {
        assert_eq!(p("C4").midi(), Some(60));
        assert_eq!(p("Cb4").midi(), Some(59));
        assert_eq!(p("B#3").midi(), Some(60));
        assert_eq!(p("C").midi(), None);
        let a4 = p("A4").freq().unwrap();
        assert!((a4 - 440.0).abs() < 1e-9);
        assert_eq!(Pitch::from_midi(61, true).to_string(), "C#4");
        assert_eq!(Pitch::from_midi(61, false).to_string(), "Db4");
        assert_eq!(Pitch::from_midi(-1, false).to_string(), "B-2");
    }

    #[test]
    fn chroma_ignores_spelling() {
        assert_eq!(p("C").chroma(), 0);
        assert_eq!(p("B#").chroma(), 0);
        assert_eq!(p("Dbb").chroma(), 0);
        assert_eq!(p("Bb2").chroma(), 10);
    }

    #[test]
    fn transposes_pitch_classes_and_pitches() {
        let third = Interval::parse("3M").unwrap();
        assert_eq!(p("Ab").transpose(&third).to_string(), "C");
        assert_eq!(p("B3").transpose(&third).to_string(), "D#4");
        let down = Interval::parse("-2m").unwrap();
        assert_eq!(p("C4").transpose(&down).to_string(), "B3");
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&p("F#3")).unwrap();
        assert_eq!(json, "\"F#3\"");
        let back: Pitch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p("F#3"));
        assert!(serde_json::from_str::<Pitch>("\"X\"").is_err());
    }
}

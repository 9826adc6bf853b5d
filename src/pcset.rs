//! Pitch-Class Sets
//!
//! A [`Chroma`] is a 12-bit set over pitch classes (bit 0 = C). It is the
//! canonical identity of a chord or scale shape and the key of the
//! dictionary's reverse index.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::interval::Interval;
use crate::note::Pitch;

const SEMITONES: u8 = 12;
const MASK: u16 = 0x0FFF;

/// Anything that lands on a pitch class.
pub trait Chromatic {
    /// Pitch class number, 0..12.
    fn chroma(&self) -> u8;
}

impl Chromatic for Pitch {
    fn chroma(&self) -> u8 {
        Pitch::chroma(self)
    }
}

impl Chromatic for Interval {
    fn chroma(&self) -> u8 {
        self.semitones().rem_euclid(SEMITONES as i32) as u8
    }
}

impl<T: Chromatic + ?Sized> Chromatic for &T {
    fn chroma(&self) -> u8 {
        (**self).chroma()
    }
}

/// A set of pitch classes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Chroma(u16);

impl Chroma {
    /// The empty set.
    pub const EMPTY: Chroma = Chroma(0);

    /// Set from raw bits, bit `i` for pitch class `i`. Bits above 11 are dropped.
    pub const fn from_bits(bits: u16) -> Chroma {
        Chroma(bits & MASK)
    }

    /// Raw bits, bit `i` for pitch class `i`.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Set of the pitch classes of `items`; duplicates collapse.
    ///
    /// ```
    /// use tonality::{Chroma, Pitch};
    ///
    /// let notes: Vec<Pitch> = ["C4", "E4", "G4", "C5"]
    ///     .iter()
    ///     .filter_map(|n| Pitch::parse(n))
    ///     .collect();
    /// assert_eq!(Chroma::of(&notes).to_string(), "100010010000");
    /// ```
    pub fn of<I>(items: I) -> Chroma
    where
        I: IntoIterator,
        I::Item: Chromatic,
    {
        items
            .into_iter()
            .fold(Chroma::EMPTY, |acc, item| Chroma(acc.0 | 1 << item.chroma()))
    }

    /// Set from note or interval names. Each string is read as a note first,
    /// then as an interval; strings that are neither are skipped.
    pub fn from_names<I, S>(names: I) -> Chroma
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes = names.into_iter().filter_map(|name| {
            let name: &str = name.as_ref();
            Pitch::parse(name)
                .map(|p| p.chroma())
                .or_else(|| Interval::parse(name).map(|i| Chromatic::chroma(&i)))
        });
        classes.fold(Chroma::EMPTY, |acc, pc| Chroma(acc.0 | 1 << pc))
    }

    /// Set from the integer reading of its binary string (C is the most
    /// significant of 12 digits).
    pub fn from_num(num: u16) -> Chroma {
        (0..SEMITONES)
            .filter(|&i| num >> (SEMITONES - 1 - i) & 1 == 1)
            .fold(Chroma::EMPTY, |acc, i| Chroma(acc.0 | 1 << i))
    }

    /// Integer reading of the binary string; C major is 2773.
    pub fn num(self) -> u16 {
        self.pitch_classes()
            .fold(0, |acc, i| acc | 1 << (SEMITONES - 1 - i))
    }

    /// Every set that contains C, in `num` order.
    pub fn all() -> Vec<Chroma> {
        (2048..4096).map(Chroma::from_num).collect()
    }

    /// True if pitch class `pc` (taken modulo 12) is present.
    pub fn contains(self, pc: u8) -> bool {
        self.0 >> (pc % SEMITONES) & 1 == 1
    }

    /// True if the item's pitch class is present.
    pub fn includes<T: Chromatic + ?Sized>(self, item: &T) -> bool {
        self.contains(item.chroma())
    }

    /// Items whose pitch class is present, in their original order.
    pub fn filter<T: Chromatic + Clone>(self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.includes(*item))
            .cloned()
            .collect()
    }

    /// Number of pitch classes in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True for the empty set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Present pitch classes in ascending order.
    pub fn pitch_classes(self) -> impl Iterator<Item = u8> {
        (0..SEMITONES).filter(move |&pc| self.contains(pc))
    }

    /// Rotate so that pitch class `pc` becomes pitch class 0.
    pub fn rotate_to(self, pc: u8) -> Chroma {
        let pc = pc % SEMITONES;
        Chroma::from_bits(self.0 >> pc | self.0 << (SEMITONES - pc))
    }

    /// One rotation per present pitch class, in ascending order, each
    /// starting on that pitch class.
    ///
    /// ```
    /// use tonality::Chroma;
    ///
    /// let major: Chroma = "101011010101".parse().unwrap();
    /// let modes = major.modes();
    /// assert_eq!(modes.len(), 7);
    /// assert_eq!(modes[1].to_string(), "101101010110"); // dorian
    /// ```
    pub fn modes(self) -> Vec<Chroma> {
        self.pitch_classes().map(|pc| self.rotate_to(pc)).collect()
    }

    /// Proper subset: every pitch class of `self` is in `other`, and the
    /// sets differ.
    pub fn is_subset_of(self, other: Chroma) -> bool {
        self != other && self.0 & other.0 == self.0
    }

    /// Proper superset: `other` is a proper subset of `self`.
    pub fn is_superset_of(self, other: Chroma) -> bool {
        other.is_subset_of(self)
    }

    /// Same pitch classes.
    pub fn is_equal(self, other: Chroma) -> bool {
        self == other
    }

    /// Intervals above C of each present pitch class
    /// (`1P 2m 2M 3m 3M 4P 5d 5P 6m 6M 7m 7M`).
    pub fn intervals(self) -> Vec<Interval> {
        self.pitch_classes()
            .map(|pc| Interval::from_semitones(pc as i32))
            .collect()
    }
}

impl Display for Chroma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pc in 0..SEMITONES {
            f.write_str(if self.contains(pc) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Chroma {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != SEMITONES as usize || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(ParseError::Chroma(s.to_string()));
        }
        let bits = s
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'1')
            .fold(0u16, |acc, (i, _)| acc | 1 << i);
        Ok(Chroma(bits))
    }
}

impl TryFrom<String> for Chroma {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Chroma> for String {
    fn from(c: Chroma) -> String {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chroma(s: &str) -> Chroma {
        s.parse().unwrap()
    }

    #[test]
    fn chroma_of_notes_and_intervals() {
        let major = Chroma::from_names(["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(major.to_string(), "101011010101");
        assert_eq!(major.num(), 2773);
        assert_eq!(Chroma::from_num(2773), major);

        let ivls = Chroma::from_names(["1P", "3M", "5P", "-2M"]);
        assert_eq!(ivls.to_string(), "100010010010");
    }

    #[test]
    fn duplicates_and_octaves_collapse() {
        let a = Chroma::from_names(["C4", "E2", "G5", "c", "B#3", "e"]);
        let b = Chroma::from_names(["C", "E", "G"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn unparseable_names_are_skipped() {
        assert_eq!(Chroma::from_names(["C", "blah", "H"]), chroma("100000000000"));
        assert!(Chroma::from_names(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn modes_rotate_to_each_member() {
        let major = chroma("101011010101");
        let modes: Vec<String> = major.modes().iter().map(|m| m.to_string()).collect();
        assert_eq!(
            modes,
            [
                "101011010101", // ionian
                "101101010110", // dorian
                "110101011010", // phrygian
                "101010110101", // lydian
                "101011010110", // mixolydian
                "101101011010", // aeolian
                "110101101010", // locrian
            ]
        );
        assert!(major.modes().iter().all(|m| m.contains(0)));
    }

    #[test]
    fn modes_count_matches_size() {
        for c in Chroma::all().into_iter().step_by(7) {
            assert_eq!(c.modes().len(), c.len());
        }
        assert!(Chroma::EMPTY.modes().is_empty());
    }

    #[test]
    fn subset_is_proper() {
        let triad = chroma("100010010000");
        let seventh = chroma("100010010001");
        assert!(triad.is_subset_of(seventh));
        assert!(!seventh.is_subset_of(triad));
        assert!(seventh.is_superset_of(triad));
        assert!(!triad.is_superset_of(seventh));

        // equal sets are neither subsets nor supersets of each other
        assert!(!triad.is_subset_of(triad));
        assert!(!triad.is_superset_of(triad));
        assert!(triad.is_equal(triad));
    }

    #[test]
    fn intervals_rebuild_the_same_set() {
        assert_eq!(
            chroma("100010010001")
                .intervals()
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>(),
            ["1P", "3M", "5P", "7M"]
        );
        for c in Chroma::all() {
            assert_eq!(Chroma::of(c.intervals()), c);
        }
    }

    #[test]
    fn all_sets_contain_c() {
        let all = Chroma::all();
        assert_eq!(all.len(), 2048);
        assert!(all.iter().all(|c| c.contains(0)));
        assert_eq!(all[0].to_string(), "100000000000");
        assert_eq!(all[2047].to_string(), "111111111111");
    }

    #[test]
    fn includes_and_filter() {
        let c_major = chroma("101011010101");
        let notes: Vec<Pitch> = ["C2", "C#", "Fb", "Bb4", "B"]
            .iter()
            .filter_map(|n| Pitch::parse(n))
            .collect();
        let kept: Vec<String> = c_major.filter(&notes).iter().map(|p| p.to_string()).collect();
        assert_eq!(kept, ["C2", "Fb", "B"]);
        assert!(c_major.includes(&notes[0]));
        assert!(!c_major.includes(&notes[1]));
    }

    #[test]
    fn rejects_bad_strings() {
        assert!("10101".parse::<Chroma>().is_err());
        assert!("10101101010x".parse::<Chroma>().is_err());
    }
}

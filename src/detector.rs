//! Detector
//!
//! Names a collection of notes by matching its chroma against a dictionary,
//! trying every input note as the tonic.

use std::fmt::{self, Display};

use crate::dictionary::{Dictionary, Entry};
use crate::note::Pitch;
use crate::pcset::Chroma;

/// One way of naming the input notes.
#[derive(Debug, Clone, Copy)]
pub struct Detection<'d> {
    /// Pitch class of the input note used as tonic.
    pub tonic: Pitch,
    /// The dictionary entry whose chroma matched.
    pub entry: &'d Entry,
}

impl Display for Detection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.entry.name())
    }
}

/// Chroma-matching detector over a borrowed dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Detector<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> Detector<'d> {
    /// Detector over `dictionary`.
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Detector { dictionary }
    }

    /// Every `"<tonic> <name>"` consistent with the notes.
    ///
    /// ```
    /// use tonality::{Detector, Dictionary};
    ///
    /// let chords = Dictionary::chords();
    /// let names = Detector::new(&chords).detect(["E", "C", "A", "G"]);
    /// assert_eq!(names, ["C sixth", "A minor seventh"]);
    /// ```
    pub fn detect<I, S>(&self, notes: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.matches(notes).iter().map(ToString::to_string).collect()
    }

    /// Every `(tonic, entry)` whose rotated chroma equals the notes' chroma.
    ///
    /// Tonics are tried in order of first appearance in `notes`; entries for
    /// one tonic come in dictionary insertion order. Unparseable notes are
    /// ignored, and nothing matches an empty set.
    pub fn matches<I, S>(&self, notes: I) -> Vec<Detection<'d>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tonics: Vec<Pitch> = Vec::new();
        for note in notes {
            let note: &str = note.as_ref();
            if let Some(pitch) = Pitch::parse(note) {
                if !tonics.iter().any(|t| t.chroma() == pitch.chroma()) {
                    tonics.push(pitch.pitch_class());
                }
            }
        }
        let chroma = Chroma::of(&tonics);
        log::trace!("detecting {} pitch classes, chroma {chroma}", tonics.len());

        tonics
            .iter()
            .flat_map(|tonic| {
                self.dictionary
                    .with_chroma(chroma.rotate_to(tonic.chroma()))
                    .map(move |entry| Detection {
                        tonic: *tonic,
                        entry,
                    })
            })
            .collect()
    }
}

//! Chords
//!
//! Queries over a chord dictionary. Chord symbols may glue the tonic to the
//! type (`"Bbmaj7"`) or separate them with a space (`"F# minor"`).

use crate::detector::Detector;
use crate::dictionary::{Dictionary, Named};
use crate::harmonizer::Transposer;
use crate::interval::Interval;
use crate::note::Pitch;

/// Split a chord symbol into tonic and type. The tonic is a note letter
/// followed by a run of one accidental symbol; everything after it, trimmed,
/// is the type. Octave digits are left in the type.
///
/// ```
/// use tonality::chord;
///
/// let (tonic, kind) = chord::tokenize("Bbmaj7");
/// assert_eq!(tonic.unwrap().to_string(), "Bb");
/// assert_eq!(kind, "maj7");
/// assert_eq!(chord::tokenize("7").0, None);
/// ```
pub fn tokenize(name: &str) -> (Option<Pitch>, &str) {
    let name = name.trim();
    let bytes = name.as_bytes();
    let letter = bytes.first().map(u8::to_ascii_uppercase);
    if !matches!(letter, Some(b'A'..=b'G')) {
        return (None, name);
    }
    let end = match bytes.get(1) {
        Some(&s @ (b'#' | b'b' | b'x')) => {
            1 + bytes[1..].iter().take_while(|&&b| b == s).count()
        }
        _ => 1,
    };
    match Pitch::parse(&name[..end]) {
        Some(tonic) => (Some(tonic), name[end..].trim()),
        None => (None, name),
    }
}

/// Resolve a chord symbol. A registered name wins over splitting off a
/// tonic, so `"aug"` is a type and not `A` + `"ug"`.
fn resolve<'d>(dict: &'d Dictionary, name: &str) -> Option<Named<'d>> {
    if let Some(named) = dict.lookup(name) {
        return Some(named);
    }
    let (tonic, kind) = tokenize(name);
    let tonic = tonic?;
    if !dict.contains(kind) {
        return None;
    }
    dict.get(kind).map(|entry| Named {
        tonic: Some(tonic),
        entry,
    })
}

/// Notes of the chord. `tonic` overrides a tonic in the symbol and keeps its
/// octave; a tonic from the symbol gives pitch classes. Empty when there is
/// no tonic or the type is unknown.
///
/// ```
/// use tonality::{chord, Dictionary};
///
/// let chords = Dictionary::chords();
/// let notes: Vec<String> = chord::notes(&chords, "Ebm7", None)
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(notes, ["Eb", "Gb", "Bb", "Db"]);
/// ```
pub fn notes(dict: &Dictionary, name: &str, tonic: Option<&Pitch>) -> Vec<Pitch> {
    let Some(named) = resolve(dict, name) else {
        return Vec::new();
    };
    let from_symbol = named.tonic.map(|t| t.pitch_class());
    match tonic.copied().or(from_symbol) {
        Some(tonic) => Transposer::new(named.entry.intervals().to_vec()).apply(&tonic),
        None => Vec::new(),
    }
}

/// Intervals of the chord type; a tonic in the symbol is ignored.
pub fn intervals(dict: &Dictionary, name: &str) -> Vec<Interval> {
    resolve(dict, name)
        .map(|named| named.entry.intervals().to_vec())
        .unwrap_or_default()
}

/// True if the symbol resolves, with or without a tonic.
pub fn exists(dict: &Dictionary, name: &str) -> bool {
    resolve(dict, name).is_some()
}

/// Notes of chord type `kind` above `tonic`. `None` when the type is unknown.
pub fn get(dict: &Dictionary, kind: &str, tonic: &Pitch) -> Option<Vec<Pitch>> {
    transposer(dict, kind).map(|t| t.apply(tonic))
}

/// A reusable transposer for chord type `kind`.
pub fn transposer(dict: &Dictionary, kind: &str) -> Option<Transposer> {
    dict.get(kind)
        .map(|entry| Transposer::new(entry.intervals().to_vec()))
}

/// Every `"<tonic> <chord>"` whose notes are exactly the given pitch classes.
///
/// ```
/// use tonality::{chord, Dictionary};
///
/// let chords = Dictionary::chords();
/// let found = chord::detect(&chords, ["C", "E", "G"]);
/// assert_eq!(found[0], "C major");
/// assert!(!found.contains(&"A minor".to_string()));
/// ```
pub fn detect<I, S>(dict: &Dictionary, notes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Detector::new(dict).detect(notes)
}

/// Canonical chord names in table order.
pub fn names(dict: &Dictionary) -> Vec<&str> {
    dict.names()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell<T: ToString>(items: &[T]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn tokenizes_symbols() {
        assert_eq!(tokenize("Cmaj7"), (Pitch::parse("C"), "maj7"));
        assert_eq!(tokenize("F# minor"), (Pitch::parse("F#"), "minor"));
        assert_eq!(tokenize("bbm"), (Pitch::parse("Bb"), "m"));
        assert_eq!(tokenize("C4m7"), (Pitch::parse("C"), "4m7"));
        assert_eq!(tokenize("Fx"), (Pitch::parse("Fx"), ""));
        assert_eq!(tokenize("m7b5"), (None, "m7b5"));
        assert_eq!(tokenize(""), (None, ""));
    }

    #[test]
    fn notes_of_symbols() {
        let chords = Dictionary::chords();
        assert_eq!(spell(&notes(&chords, "Cmaj7", None)), ["C", "E", "G", "B"]);
        assert_eq!(spell(&notes(&chords, "F# minor", None)), ["F#", "A", "C#"]);
        assert_eq!(spell(&notes(&chords, "Bdim", None)), ["B", "D", "F"]);
        assert_eq!(spell(&notes(&chords, "Gaug", None)), ["G", "B", "D#"]);

        let a4 = Pitch::parse("A4").unwrap();
        assert_eq!(spell(&notes(&chords, "7", Some(&a4))), ["A4", "C#5", "E5", "G5"]);
        assert_eq!(spell(&notes(&chords, "Cm", Some(&a4))), ["A4", "C5", "E5"]);

        assert_eq!(spell(&notes(&chords, "C4 maj7", None)), ["C", "E", "G", "B"]);
        assert_eq!(
            spell(&notes(&chords, "C4 maj7", Some(&a4))),
            ["A4", "C#5", "E5", "G#5"]
        );

        assert!(notes(&chords, "aug", None).is_empty());
        assert!(notes(&chords, "Cblah", None).is_empty());
    }

    #[test]
    fn registered_names_win_over_tonics() {
        let chords = Dictionary::chords();
        assert!(exists(&chords, "aug"));
        assert_eq!(spell(&intervals(&chords, "aug")), ["1P", "3M", "5A"]);
        assert_eq!(spell(&intervals(&chords, "Mb5")), ["1P", "3M", "5d"]);
        assert!(exists(&chords, "Abm7"));
        assert!(!exists(&chords, "H7"));
    }

    #[test]
    fn full_and_curried_forms_agree() {
        let chords = Dictionary::chords();
        let eb3 = Pitch::parse("Eb3").unwrap();
        let full = get(&chords, "m7", &eb3).unwrap();
        assert_eq!(spell(&full), ["Eb3", "Gb3", "Bb3", "Db4"]);
        assert_eq!(transposer(&chords, "m7").unwrap().apply(&eb3), full);
        assert!(get(&chords, "m7#", &eb3).is_none());
        assert!(names(&chords).contains(&"dominant seventh"));
    }

    #[test]
    fn detects_shared_chromas() {
        let chords = Dictionary::chords();
        assert_eq!(
            detect(&chords, ["E", "C", "A", "G"]),
            ["C sixth", "A minor seventh"]
        );
        assert!(detect(&chords, ["C", "Db", "D"]).is_empty());
    }
}

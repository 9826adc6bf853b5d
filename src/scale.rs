//! Scales
//!
//! Queries over a scale dictionary. Names may carry a tonic in front
//! (`"Eb dorian"`); the tonic can also be given separately.

use crate::detector::Detector;
use crate::dictionary::Dictionary;
use crate::harmonizer::Transposer;
use crate::interval::Interval;
use crate::note::Pitch;
use crate::pcset::Chromatic;

/// Split `"<tonic> <type>"`. The first token is the tonic only when it
/// parses as a note; otherwise the whole trimmed string is the type.
///
/// ```
/// use tonality::scale;
///
/// let (tonic, kind) = scale::parse_name("C# melodic minor");
/// assert_eq!(tonic.unwrap().to_string(), "C#");
/// assert_eq!(kind, "melodic minor");
/// assert_eq!(scale::parse_name("lydian"), (None, "lydian"));
/// ```
pub fn parse_name(name: &str) -> (Option<Pitch>, &str) {
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((head, rest)) => match Pitch::parse(head) {
            Some(tonic) => (Some(tonic), rest.trim()),
            None => (None, name),
        },
        None => match Pitch::parse(name) {
            Some(tonic) => (Some(tonic), ""),
            None => (None, name),
        },
    }
}

/// Pitch classes of the named scale. `tonic` overrides a tonic in the name.
/// Empty when there is no tonic or the type is unknown.
///
/// ```
/// use tonality::{scale, Dictionary};
///
/// let scales = Dictionary::scales();
/// let notes: Vec<String> = scale::notes(&scales, "C major", None)
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(notes, ["C", "D", "E", "F", "G", "A", "B"]);
/// ```
pub fn notes(dict: &Dictionary, name: &str, tonic: Option<&Pitch>) -> Vec<Pitch> {
    let Some(named) = dict.lookup(name) else {
        return Vec::new();
    };
    match tonic.copied().or(named.tonic) {
        Some(tonic) => {
            Transposer::new(named.entry.intervals().to_vec()).apply(&tonic.pitch_class())
        }
        None => Vec::new(),
    }
}

/// Intervals of the named scale; a tonic in the name is ignored.
pub fn intervals(dict: &Dictionary, name: &str) -> Vec<Interval> {
    dict.get(name)
        .map(|entry| entry.intervals().to_vec())
        .unwrap_or_default()
}

/// True if the name resolves, with or without a tonic.
pub fn exists(dict: &Dictionary, name: &str) -> bool {
    dict.get(name).is_some()
}

/// Notes of scale type `kind` above `tonic`, keeping the tonic's octave.
/// `None` when the type is unknown.
pub fn get(dict: &Dictionary, kind: &str, tonic: &Pitch) -> Option<Vec<Pitch>> {
    transposer(dict, kind).map(|t| t.apply(tonic))
}

/// A reusable transposer for scale type `kind`.
pub fn transposer(dict: &Dictionary, kind: &str) -> Option<Transposer> {
    dict.get(kind)
        .map(|entry| Transposer::new(entry.intervals().to_vec()))
}

/// Name the mode on every degree of the scale: `"<degree> <name>"` for the
/// first dictionary entry with that rotation, `None` when nothing matches.
/// Empty when there is no tonic or the type is unknown.
///
/// ```
/// use tonality::{scale, Dictionary};
///
/// let scales = Dictionary::scales();
/// let modes = scale::modes(&scales, "C major", None);
/// assert_eq!(modes[0].as_deref(), Some("C major"));
/// assert_eq!(modes[1].as_deref(), Some("D dorian"));
/// ```
pub fn modes(dict: &Dictionary, name: &str, tonic: Option<&Pitch>) -> Vec<Option<String>> {
    let Some(named) = dict.lookup(name) else {
        return Vec::new();
    };
    let Some(tonic) = tonic.copied().or(named.tonic) else {
        return Vec::new();
    };
    let tonic = tonic.pitch_class();
    let chroma = named.entry.chroma();

    named
        .entry
        .intervals()
        .iter()
        .map(|ivl| {
            let degree = tonic.transpose(ivl);
            dict.first_with_chroma(chroma.rotate_to(ivl.chroma()))
                .map(|mode| format!("{degree} {}", mode.name()))
        })
        .collect()
}

/// Every `"<tonic> <scale>"` whose notes are exactly the given pitch classes.
pub fn detect<I, S>(dict: &Dictionary, notes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Detector::new(dict).detect(notes)
}

/// Canonical scale names in table order.
pub fn names(dict: &Dictionary) -> Vec<&str> {
    dict.names()
}

//! Integration tests for the bundled chord and scale tables.

use lazy_static::lazy_static;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::sync::{Arc, Mutex, RwLock};
use tonality::{Chroma, Dictionary, DictionaryError, Entry, Interval};

lazy_static! {
    static ref CHORDS: Dictionary = Dictionary::chords();
    static ref SCALES: Dictionary = Dictionary::scales();
}

#[test]
fn table_sizes() {
    assert_eq!(CHORDS.names().len(), 105);
    assert_eq!(CHORDS.aliases().len(), 140);
    assert_eq!(CHORDS.keys().len(), 245);

    assert_eq!(SCALES.names().len(), 91);
    assert_eq!(SCALES.aliases().len(), 39);
    assert_eq!(SCALES.keys().len(), 130);
}

#[test]
fn base_names_and_aliases_are_keys() {
    let keys = CHORDS.keys();
    assert!(keys.contains(&"Mb5"));
    assert!(keys.contains(&"M7"));
    assert_eq!(CHORDS.get("M7").unwrap().name(), "major seventh");
    assert_eq!(SCALES.get("ionian").unwrap().name(), "major");
}

#[test]
fn every_key_resolves() {
    for dict in [&*CHORDS, &*SCALES] {
        let missing: Vec<&str> = dict
            .keys()
            .par_iter()
            .filter(|key| dict.get(key).is_none())
            .copied()
            .collect();
        assert!(missing.is_empty(), "unresolved keys: {missing:?}");

        let prefixed: Vec<&str> = dict
            .names()
            .par_iter()
            .filter(|name| dict.get(&format!("Eb {name}")).is_none())
            .copied()
            .collect();
        assert!(prefixed.is_empty(), "unresolved with tonic: {prefixed:?}");
    }
}

#[test]
fn chromas_follow_intervals() {
    let failures = Arc::new(Mutex::new(Vec::<String>::new()));

    CHORDS.all().par_iter().chain(SCALES.all().par_iter()).for_each(|entry| {
        let expected = Chroma::of(entry.intervals());
        if entry.chroma() != expected {
            failures.lock().unwrap().push(format!(
                "{}: stored {} expected {}",
                entry.name(),
                entry.chroma(),
                expected
            ));
        }
        if !entry.intervals().iter().any(|i| i.to_string() == "1P") {
            failures
                .lock()
                .unwrap()
                .push(format!("{}: no unison", entry.name()));
        }
    });

    let failures = Arc::try_unwrap(failures).unwrap().into_inner().unwrap();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn index_finds_every_entry() {
    for dict in [&*CHORDS, &*SCALES] {
        dict.all().par_iter().for_each(|entry| {
            assert!(
                dict.with_chroma(entry.chroma()).any(|e| e.name() == entry.name()),
                "{} missing from its chroma slot",
                entry.name()
            );
        });
    }
}

#[test]
fn shared_chromas_are_known() {
    let shared = |dict: &Dictionary| -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (i, a) in dict.all().iter().enumerate() {
            for b in &dict.all()[i + 1..] {
                if a.chroma() == b.chroma() {
                    pairs.push((a.name().to_string(), b.name().to_string()));
                }
            }
        }
        pairs
    };

    assert!(shared(&SCALES).is_empty());
    let chords = shared(&CHORDS);
    assert_eq!(chords.len(), 6, "{chords:?}");
    assert!(chords.contains(&("7#5".to_string(), "7b13".to_string())));
    assert!(chords.contains(&("eleventh".to_string(), "9sus4".to_string())));
}

#[test]
fn scale_chromas_are_distinct_modes() {
    let major = SCALES.get("major").unwrap();
    let names: Vec<Option<&str>> = major
        .chroma()
        .modes()
        .into_iter()
        .map(|c| SCALES.first_with_chroma(c).map(Entry::name))
        .collect();
    assert_eq!(
        names,
        [
            Some("major"),
            Some("dorian"),
            Some("phrygian"),
            Some("lydian"),
            Some("mixolydian"),
            Some("aeolian"),
            Some("locrian"),
        ]
    );
}

#[test]
fn extending_builtin_tables() {
    let mut chords = Dictionary::chords();
    let before = chords.len();

    let err = chords.add("major", &["1P", "3M", "5P"], &[]).unwrap_err();
    assert!(matches!(err, DictionaryError::NameCollision { .. }));
    let err = chords.add("power chord", &["1P", "5P"], &["M7"]).unwrap_err();
    assert!(matches!(
        err,
        DictionaryError::NameCollision { existing, .. } if existing == "major seventh"
    ));
    assert_eq!(chords.len(), before);

    chords.add("stacked fourths", &["1P", "4P", "7m"], &["4ths"]).unwrap();
    assert_eq!(chords.len(), before + 1);
    assert_eq!(chords.get("D 4ths").unwrap().name(), "stacked fourths");

    chords.remove_all();
    assert!(chords.is_empty());
    assert!(chords.get("M7").is_none());
    assert!(chords.keys().is_empty());
}

#[test]
fn shared_dictionary_behind_a_lock() {
    let dict = RwLock::new(Dictionary::scales());

    ["A", "Bb", "C#", "Fb"].par_iter().for_each(|tonic| {
        let dict = dict.read().unwrap();
        let named = dict.lookup(&format!("{tonic} dorian")).unwrap();
        assert_eq!(named.tonic.unwrap().to_string(), *tonic);
    });

    dict.write()
        .unwrap()
        .add("whole tone", &["1P", "2M", "3M", "4A", "5A", "6A"], &[])
        .unwrap_err();
    dict.write()
        .unwrap()
        .add("augmented sixths", &["1P", "2M", "3M", "4A", "5A", "6A"], &[])
        .unwrap();

    let dict = dict.into_inner().unwrap();
    let sixths = dict.get("augmented sixths").unwrap();
    assert_eq!(
        dict.first_with_chroma(sixths.chroma()).unwrap().name(),
        "whole tone"
    );
}

#[test]
fn tables_from_json() {
    let entries = r#"[
        {"name": "major", "intervals": ["1P", "3M", "5P"]},
        {"name": "minor", "intervals": ["1P", "3m", "5P"]}
    ]"#;
    let aliases = r#"{"min": "minor", "M": "major", "m": "minor"}"#;

    let dict = Dictionary::from_json(entries, aliases).unwrap();
    assert_eq!(dict.names(), ["major", "minor"]);
    assert_eq!(dict.aliases(), ["M", "m", "min"]);

    let json = serde_json::to_value(dict.get("min").unwrap()).unwrap();
    assert_eq!(json["name"], "minor");
    assert_eq!(json["intervals"][1], "3m");
    assert_eq!(json["chroma"], "100100010000");

    let bad = r#"[{"name": "odd", "intervals": ["1P", "5M"]}]"#;
    assert!(matches!(
        Dictionary::from_json(bad, "{}"),
        Err(DictionaryError::InvalidInterval { .. })
    ));
    assert!(matches!(
        Dictionary::from_json("not json", "{}"),
        Err(DictionaryError::Json(_))
    ));

    let interval: Interval = serde_json::from_str("\"-9m\"").unwrap();
    assert_eq!(interval.semitones(), -13);
}

//! Dictionary
//!
//! An append-only registry of named interval lists (chord or scale types)
//! with aliases, indexed by chroma for reverse lookup.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data;
use crate::interval::Interval;
use crate::note::Pitch;
use crate::pcset::Chroma;

/// Errors when building or extending a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A name or alias is already registered.
    #[error("name `{name}` is already registered to `{existing}`")]
    NameCollision {
        /// The rejected name or alias.
        name: String,
        /// Canonical name of the entry that holds it.
        existing: String,
    },

    /// An empty string was given as a name or alias.
    #[error("names and aliases cannot be empty")]
    EmptyName,

    /// An entry was given no intervals.
    #[error("`{name}` has no intervals")]
    EmptyIntervals {
        /// Name of the rejected entry.
        name: String,
    },

    /// An interval string did not parse.
    #[error("`{interval}` in `{name}` is not a valid interval")]
    InvalidInterval {
        /// Name of the rejected entry.
        name: String,
        /// The offending interval string.
        interval: String,
    },

    /// An alias points to a name that is not registered.
    #[error("alias `{alias}` refers to unknown entry `{name}`")]
    UnknownEntry {
        /// The rejected alias.
        alias: String,
        /// The missing canonical name.
        name: String,
    },

    /// A JSON table could not be read.
    #[error("malformed dictionary table: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named interval list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    aliases: Vec<String>,
    intervals: Vec<Interval>,
    chroma: Chroma,
}

impl Entry {
    /// Canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names, in registration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Intervals above the tonic.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Pitch-class set of the intervals.
    pub fn chroma(&self) -> Chroma {
        self.chroma
    }
}

/// A lookup hit together with the tonic stripped from the query.
#[derive(Debug, Clone, Copy)]
pub struct Named<'a> {
    /// Tonic given in front of the name, if any.
    pub tonic: Option<Pitch>,
    /// The matched entry.
    pub entry: &'a Entry,
}

/// Table row of a JSON entries file.
#[derive(Deserialize)]
struct TableEntry {
    name: String,
    intervals: Vec<String>,
}

/// Builder for a `Dictionary` from type and alias tables.
#[derive(Debug, Clone, Default)]
pub struct DictionaryBuilder {
    entries: Vec<(String, Vec<String>)>,
    aliases: Vec<(String, String)>,
}

impl DictionaryBuilder {
    /// Start with no tables.
    pub fn new() -> Self {
        DictionaryBuilder::default()
    }

    /// Append a table of `(name, space-separated intervals)` rows.
    pub fn entries(mut self, table: &[(&str, &str)]) -> Self {
        for &(name, intervals) in table {
            self = self.entry(name, intervals);
        }
        self
    }

    /// Append one type.
    pub fn entry(mut self, name: &str, intervals: &str) -> Self {
        self.entries.push((
            name.to_string(),
            intervals.split_whitespace().map(String::from).collect(),
        ));
        self
    }

    /// Append a table of `(alias, canonical name)` rows.
    pub fn aliases(mut self, table: &[(&str, &str)]) -> Self {
        for &(alias, name) in table {
            self = self.alias(alias, name);
        }
        self
    }

    /// Append one alias.
    pub fn alias(mut self, alias: &str, name: &str) -> Self {
        self.aliases.push((alias.to_string(), name.to_string()));
        self
    }

    /// Register every entry, then every alias, in the order given.
    pub fn build(self) -> Result<Dictionary, DictionaryError> {
        let mut dict = Dictionary::new();
        for (name, intervals) in &self.entries {
            dict.add(name, intervals.as_slice(), &[])?;
        }
        for (alias, name) in &self.aliases {
            dict.add_alias(alias, name)?;
        }
        log::debug!(
            "built dictionary with {} entries and {} aliases",
            dict.len(),
            self.aliases.len()
        );
        Ok(dict)
    }
}

/// Registry of chord or scale types.
///
/// Every query in this crate takes a `&Dictionary`; mutation needs `&mut`,
/// so the chroma index can never be observed out of step with the entries.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
    keys: HashMap<String, usize>,
    index: HashMap<Chroma, Vec<usize>>,
}

impl Dictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// Return a builder to assemble a dictionary from tables.
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }

    /// Dictionary of the built-in chord types.
    pub fn chords() -> Self {
        Dictionary::from_tables(data::CHORDS, data::CHORD_ALIASES)
            .expect("built-in chord tables are consistent")
    }

    /// Dictionary of the built-in scale types.
    pub fn scales() -> Self {
        Dictionary::from_tables(data::SCALES, data::SCALE_ALIASES)
            .expect("built-in scale tables are consistent")
    }

    /// Build from a type table and an alias table.
    pub fn from_tables(
        entries: &[(&str, &str)],
        aliases: &[(&str, &str)],
    ) -> Result<Self, DictionaryError> {
        Dictionary::builder().entries(entries).aliases(aliases).build()
    }

    /// Build from JSON tables: `[{"name": .., "intervals": [..]}, ..]` and
    /// `{"alias": "name", ..}`. Aliases are registered in key order.
    pub fn from_json(entries: &str, aliases: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<TableEntry> = serde_json::from_str(entries)?;
        let aliases: BTreeMap<String, String> = serde_json::from_str(aliases)?;

        let mut dict = Dictionary::new();
        for entry in &entries {
            dict.add(&entry.name, entry.intervals.as_slice(), &[])?;
        }
        for (alias, name) in &aliases {
            dict.add_alias(alias, name)?;
        }
        Ok(dict)
    }

    /// Register a new type.
    ///
    /// Names and aliases are unique across the dictionary: re-adding a
    /// registered name is a `NameCollision`, never an overwrite. Nothing is
    /// registered when an error is returned.
    ///
    /// ```
    /// use tonality::Dictionary;
    ///
    /// let mut dict = Dictionary::new();
    /// dict.add("power", &["1P", "5P"], &["5"]).unwrap();
    /// assert!(dict.add("5", &["1P", "5P"], &[]).is_err());
    /// assert_eq!(dict.get("5").unwrap().name(), "power");
    /// ```
    pub fn add<S: AsRef<str>>(
        &mut self,
        name: &str,
        intervals: &[S],
        aliases: &[S],
    ) -> Result<(), DictionaryError> {
        self.check_free(name)?;

        let intervals = intervals
            .iter()
            .map(|ivl| {
                let ivl: &str = ivl.as_ref();
                Interval::parse(ivl).ok_or_else(|| DictionaryError::InvalidInterval {
                    name: name.to_string(),
                    interval: ivl.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if intervals.is_empty() {
            return Err(DictionaryError::EmptyIntervals {
                name: name.to_string(),
            });
        }

        let mut kept: Vec<String> = Vec::with_capacity(aliases.len());
        for alias in aliases {
            let alias: &str = alias.as_ref();
            if alias == name || kept.iter().any(|k| k == alias) {
                continue;
            }
            self.check_free(alias)?;
            kept.push(alias.to_string());
        }

        let id = self.entries.len();
        let chroma = Chroma::of(&intervals);
        self.keys.insert(name.to_string(), id);
        for alias in &kept {
            self.keys.insert(alias.clone(), id);
        }
        self.index.entry(chroma).or_default().push(id);
        self.entries.push(Entry {
            name: name.to_string(),
            aliases: kept,
            intervals,
            chroma,
        });
        log::debug!("registered `{name}` with chroma {chroma}");
        Ok(())
    }

    /// Register another name for an existing entry.
    pub fn add_alias(&mut self, alias: &str, name: &str) -> Result<(), DictionaryError> {
        let id = *self
            .keys
            .get(name)
            .ok_or_else(|| DictionaryError::UnknownEntry {
                alias: alias.to_string(),
                name: name.to_string(),
            })?;
        self.check_free(alias)?;
        self.keys.insert(alias.to_string(), id);
        self.entries[id].aliases.push(alias.to_string());
        log::debug!("registered alias `{alias}` for `{}`", self.entries[id].name);
        Ok(())
    }

    fn check_free(&self, key: &str) -> Result<(), DictionaryError> {
        if key.is_empty() {
            return Err(DictionaryError::EmptyName);
        }
        match self.keys.get(key) {
            Some(&id) => Err(DictionaryError::NameCollision {
                name: key.to_string(),
                existing: self.entries[id].name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Look up a name or alias, optionally preceded by a tonic
    /// (`"C major"`). Unknown names give `None`.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.lookup(name).map(|named| named.entry)
    }

    /// Like [`get`](Self::get), also returning the stripped tonic.
    ///
    /// ```
    /// use tonality::Dictionary;
    ///
    /// let scales = Dictionary::scales();
    /// let named = scales.lookup("Eb dorian").unwrap();
    /// assert_eq!(named.tonic.unwrap().to_string(), "Eb");
    /// assert_eq!(named.entry.name(), "dorian");
    /// ```
    pub fn lookup(&self, name: &str) -> Option<Named<'_>> {
        let name = name.trim();
        if let Some(entry) = self.key(name) {
            return Some(Named { tonic: None, entry });
        }
        let (head, rest) = name.split_once(char::is_whitespace)?;
        let tonic = Pitch::parse(head)?;
        self.key(rest.trim()).map(|entry| Named {
            tonic: Some(tonic),
            entry,
        })
    }

    fn key(&self, key: &str) -> Option<&Entry> {
        self.keys.get(key).map(|&id| &self.entries[id])
    }

    /// True if `name` is a registered name or alias.
    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains_key(name)
    }

    /// All entries in insertion order.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Canonical names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::name).collect()
    }

    /// Aliases in entry order, then registration order.
    pub fn aliases(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.aliases.iter().map(String::as_str))
            .collect()
    }

    /// Every name that `get` resolves: canonical names, then aliases.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = self.names();
        keys.extend(self.aliases());
        keys
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, alias and index slot.
    pub fn remove_all(&mut self) {
        log::debug!("removing {} entries", self.entries.len());
        self.entries.clear();
        self.keys.clear();
        self.index.clear();
    }

    /// Entries with exactly this chroma, in insertion order.
    pub fn with_chroma(&self, chroma: Chroma) -> impl Iterator<Item = &Entry> + '_ {
        self.index
            .get(&chroma)
            .into_iter()
            .flatten()
            .map(move |&id| &self.entries[id])
    }

    /// The earliest entry with this chroma.
    pub fn first_with_chroma(&self, chroma: Chroma) -> Option<&Entry> {
        self.with_chroma(chroma).next()
    }
}

//! Per-key entries and the composed translation table.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::keys::KeyId;
use crate::os::OsVariant;
use crate::primitives::none_on_make_none_on_break;
use crate::sequence::Sequence;

/// Sequences of one key, keyed by OS variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    variants: BTreeMap<OsVariant, Sequence>,
}

impl Entry {
    /// Entry with a single sequence valid on every host.
    pub fn all(sequence: Sequence) -> Self {
        Self::default().on(OsVariant::All, sequence)
    }

    /// Set the sequence for `os`.
    pub fn on(mut self, os: OsVariant, sequence: Sequence) -> Self {
        self.variants.insert(os, sequence);
        self
    }

    /// Set the same sequence for several variants.
    pub fn on_each(mut self, variants: &[OsVariant], sequence: Sequence) -> Self {
        for &os in variants {
            self.variants.insert(os, sequence.clone());
        }
        self
    }

    /// Silence the key while the host runs the boot protocol.
    pub fn boot_none(self) -> Self {
        self.on(OsVariant::Boot, none_on_make_none_on_break())
    }

    /// Sequence stored under exactly `os`.
    pub fn get(&self, os: OsVariant) -> Option<&Sequence> {
        self.variants.get(&os)
    }

    /// Sequence for `os`, falling back to `All` once.
    pub fn resolve(&self, os: OsVariant) -> Option<&Sequence> {
        self.variants
            .get(&os)
            .or_else(|| self.variants.get(&OsVariant::All))
    }

    pub fn variants(&self) -> impl Iterator<Item = (OsVariant, &Sequence)> {
        self.variants.iter().map(|(os, sequence)| (*os, sequence))
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Composed `KeyId -> Entry` map.
///
/// Layers are merged whole-entry: a later layer replaces the earlier entry
/// for a key rather than merging variants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationTable {
    entries: BTreeMap<KeyId, Entry>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `key`. Returns the replaced entry.
    pub fn insert(&mut self, key: KeyId, entry: Entry) -> Option<Entry> {
        self.entries.insert(key, entry)
    }

    /// Overlay `layer` on top of this table.
    pub fn overlay(&mut self, layer: impl IntoIterator<Item = (KeyId, Entry)>) {
        self.entries.extend(layer);
    }

    pub fn get(&self, key: KeyId) -> Option<&Entry> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: KeyId) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = KeyId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, KeyId, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(KeyId, Entry)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (KeyId, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TranslationTable {
    type Item = (KeyId, Entry);
    type IntoIter = btree_map::IntoIter<KeyId, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TranslationTable {
    type Item = (&'a KeyId, &'a Entry);
    type IntoIter = btree_map::Iter<'a, KeyId, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

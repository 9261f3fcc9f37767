//! PromptSet entity - the parsed document as an ordered name → entry map
//!
//! Insertion order is the declaration order of the source document and only
//! affects listing and Makefile rule order.

use indexmap::map::Entry as MapEntry;
use indexmap::IndexMap;

use super::entry::Entry;
use crate::error::GraphError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSet {
    entries: IndexMap<String, Entry>,
}

impl PromptSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from parsed entries, rejecting duplicate names.
    ///
    /// The error carries the position of the second declaration.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Result<Self, GraphError> {
        let mut set = Self::new();
        for entry in entries {
            set.insert(entry)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, entry: Entry) -> Result<(), GraphError> {
        match self.entries.entry(entry.name.clone()) {
            MapEntry::Occupied(_) => Err(GraphError::DuplicateEntry {
                name: entry.name,
                position: entry.position,
            }),
            MapEntry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Non-macro entries, i.e. the build targets.
    pub fn artifacts(&self) -> impl Iterator<Item = &Entry> {
        self.iter().filter(|entry| !entry.is_macro())
    }

    /// Position of `name` in declaration order.
    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }
}

impl<'a> IntoIterator for &'a PromptSet {
    type Item = &'a Entry;
    type IntoIter = indexmap::map::Values<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

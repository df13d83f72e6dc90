use std::collections::btree_map::{self, BTreeMap};
use std::path::{Path, PathBuf};

use super::error::{SnippetError, SnippetResult};

/// A completed, sanitized snippet ready to be spliced into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub source_file: PathBuf,
    pub content: String,
}

impl Snippet {
    pub fn new(name: String, source_file: PathBuf, content: String) -> Self {
        Self {
            name,
            source_file,
            content,
        }
    }
}

/// A snippet as it leaves the stack machine: named, but not yet sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSnippet {
    pub name: String,
    pub source_file: PathBuf,
    pub content: String,
}

impl RawSnippet {
    pub fn new(name: String, source_file: PathBuf, content: String) -> Self {
        Self {
            name,
            source_file,
            content,
        }
    }
}

/// Name-keyed table of snippets with globally unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetMap {
    entries: BTreeMap<String, Snippet>,
}

impl SnippetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a snippet, failing if its name is already taken.
    pub fn insert(&mut self, snippet: Snippet) -> SnippetResult<()> {
        match self.entries.entry(snippet.name.clone()) {
            btree_map::Entry::Occupied(existing) => Err(SnippetError::DuplicateSnippetName {
                name: snippet.name,
                file: snippet.source_file,
                first_defined_in: existing.get().source_file.clone(),
            }),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(snippet);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Snippet> {
        self.entries.get(name)
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

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.entries.values()
    }

    /// Snippets that were extracted from the given file.
    pub fn from_file<'a>(&'a self, file: &'a Path) -> impl Iterator<Item = &'a Snippet> + 'a {
        self.entries
            .values()
            .filter(move |snippet| snippet.source_file == file)
    }
}

impl IntoIterator for SnippetMap {
    type Item = (String, Snippet);
    type IntoIter = btree_map::IntoIter<String, Snippet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

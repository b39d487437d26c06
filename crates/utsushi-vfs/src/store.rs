//! The path → content mapping.
//!
//! Keys are canonical paths (see [`crate::path`]); callers normalize before
//! calling in. Iteration order is insertion order: overwriting an entry keeps
//! its position, deleting closes the gap, and a rename moves the entry to the
//! end. Every mutation either completes or leaves the map untouched.

use indexmap::IndexMap;
use std::time::SystemTime;

use crate::error::{VfsError, VfsResult};
use crate::types::FileStat;

/// A single stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    content: String,
    created: SystemTime,
    modified: SystemTime,
    accessed: SystemTime,
}

impl Entry {
    fn new(content: String) -> Self {
        let now = SystemTime::now();
        Self {
            content,
            created: now,
            modified: now,
            accessed: now,
        }
    }

    /// File content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content length in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    fn touch(&mut self) {
        self.modified = SystemTime::now();
    }
}

/// Owned path → entry map. One per engine instance.
#[derive(Debug, Clone, Default)]
pub struct Store {
    entries: IndexMap<String, Entry>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry without touching its access time.
    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.entries.get(path)
    }

    /// Returns true if an entry exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Read an entry's content, recording the access.
    pub fn read(&mut self, path: &str) -> VfsResult<String> {
        let entry = self
            .entries
            .get_mut(path)
            .ok_or_else(|| VfsError::not_found(path))?;
        entry.accessed = SystemTime::now();
        Ok(entry.content.clone())
    }

    /// Create or fully replace an entry. Returns true if it was created.
    pub fn write(&mut self, path: &str, content: impl Into<String>) -> bool {
        let content = content.into();
        match self.entries.get_mut(path) {
            Some(entry) => {
                entry.content = content;
                entry.touch();
                false
            }
            None => {
                self.entries.insert(path.to_string(), Entry::new(content));
                true
            }
        }
    }

    /// Append to an entry, creating it if absent. Returns true if it was created.
    pub fn append(&mut self, path: &str, content: &str) -> bool {
        match self.entries.get_mut(path) {
            Some(entry) => {
                entry.content.push_str(content);
                entry.touch();
                false
            }
            None => {
                self.entries
                    .insert(path.to_string(), Entry::new(content.to_string()));
                true
            }
        }
    }

    /// Remove an entry. Returns true if something was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        self.entries.shift_remove(path).is_some()
    }

    /// Duplicate `src`'s content at `dst`.
    pub fn copy(&mut self, src: &str, dst: &str, overwrite: bool) -> VfsResult<()> {
        let content = self
            .entries
            .get(src)
            .map(|e| e.content.clone())
            .ok_or_else(|| VfsError::not_found(src))?;

        if !overwrite && self.entries.contains_key(dst) {
            return Err(VfsError::already_exists(dst));
        }

        self.write(dst, content);
        Ok(())
    }

    /// Move `src`'s entry to `dst`. The destination must not exist.
    pub fn rename(&mut self, src: &str, dst: &str) -> VfsResult<()> {
        if !self.entries.contains_key(src) {
            return Err(VfsError::not_found(src));
        }
        if self.entries.contains_key(dst) {
            return Err(VfsError::already_exists(dst));
        }

        if let Some(entry) = self.entries.shift_remove(src) {
            self.entries.insert(dst.to_string(), entry);
        }
        Ok(())
    }

    /// Metadata snapshot for an entry.
    pub fn stat(&self, path: &str) -> VfsResult<FileStat> {
        let entry = self
            .entries
            .get(path)
            .ok_or_else(|| VfsError::not_found(path))?;

        Ok(FileStat {
            path: path.to_string(),
            size: entry.size(),
            is_file: true,
            is_directory: false,
            is_symbolic_link: false,
            created: entry.created,
            modified: entry.modified,
            accessed: entry.accessed,
            exists: true,
        })
    }

    /// All paths in iteration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All `(path, entry)` pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<P, C> FromIterator<(P, C)> for Store
where
    P: AsRef<str>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut store = Store::new();
        for (path, content) in iter {
            store.write(path.as_ref(), content);
        }
        store
    }
}

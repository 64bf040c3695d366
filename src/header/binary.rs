//! src/header/binary.rs
//!
//! An ordered collection of [`HeaderEntry`] values with a contiguous
//! binary encoding: each entry's fixed-width bytes, concatenated in
//! declaration order. The encoding is schema-less on the wire — parsing
//! requires the same ordered list of placeholders that produced it.

use crate::error::{PhrasecryptError, Result};
use crate::header::entry::{EntryValue, HeaderEntry};

/// An ordered binary header. Insertion order defines the byte layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryHeader {
    entries: Vec<HeaderEntry>,
}

impl BinaryHeader {
    /// An empty header (zero size, zero entries).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a header from an ordered entry list.
    pub fn from_entries(entries: Vec<HeaderEntry>) -> Self {
        Self { entries }
    }

    /// Parse a header from the prefix of `bytes` against `schema`.
    ///
    /// Each schema entry is cloned and its value replaced by decoding the
    /// next `width()` bytes. Fails with a format error when `bytes` is
    /// shorter than the cumulative schema width; surplus bytes past the
    /// schema width are ignored (callers that carry a payload after the
    /// header use [`DataContainer`](crate::container::DataContainer)).
    pub fn from_bytes(bytes: &[u8], schema: &[HeaderEntry]) -> Result<Self> {
        let needed: usize = schema.iter().map(HeaderEntry::width).sum();
        if bytes.len() < needed {
            return Err(PhrasecryptError::Format(format!(
                "header requires {needed} bytes, got {}",
                bytes.len()
            )));
        }

        let mut entries = Vec::with_capacity(schema.len());
        let mut offset = 0;
        for placeholder in schema {
            let width = placeholder.width();
            let mut entry = placeholder.clone();
            entry.set_entry_bytes(&bytes[offset..offset + width])?;
            offset += width;
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HeaderEntry) {
        self.entries.push(entry);
    }

    /// Append a named value.
    pub fn add(&mut self, name: impl Into<String>, value: EntryValue) {
        self.entries.push(HeaderEntry::new(name, value));
    }

    /// Total encoded size in bytes: the sum of the entries' fixed widths.
    pub fn size(&self) -> usize {
        self.entries.iter().map(HeaderEntry::width).sum()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    /// Look up an entry by name.
    ///
    /// Lookup is first-match: duplicate names are permitted at
    /// construction, but only the first occurrence is ever retrievable.
    pub fn get(&self, name: &str) -> Result<&HeaderEntry> {
        self.entries
            .iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| PhrasecryptError::NotFound(name.to_string()))
    }

    /// Serialize: every entry's bytes, concatenated in order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());
        for entry in &self.entries {
            bytes.extend_from_slice(&entry.entry_bytes());
        }
        bytes
    }
}

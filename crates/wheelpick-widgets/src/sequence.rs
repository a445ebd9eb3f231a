//! Padded item sequence for the wheel picker.
//!
//! The caller's items are wrapped with blank placeholders on both ends so the
//! first and last real items can reach the center of the viewport.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Number of blank placeholders added before and after the items.
pub const PADDING_COUNT: usize = 4;

/// Wrap `items` with [`PADDING_COUNT`] empty labels on each side.
pub fn build_sequence<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut entries = Vec::with_capacity(items.len() + 2 * PADDING_COUNT);
    entries.extend(std::iter::repeat_with(String::new).take(PADDING_COUNT));
    entries.extend(items.iter().map(|s| s.as_ref().to_owned()));
    entries.extend(std::iter::repeat_with(String::new).take(PADDING_COUNT));
    entries
}

/// Content key of an item list. Equal lists always produce equal keys.
pub fn content_key<S: AsRef<str>>(items: &[S]) -> u64 {
    let mut hasher = DefaultHasher::new();
    items.len().hash(&mut hasher);
    for item in items {
        item.as_ref().hash(&mut hasher);
    }
    hasher.finish()
}

/// The padded sequence plus index mapping between sequence and real indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    entries: Vec<String>,
    real_len: usize,
    key: u64,
}

impl Sequence {
    /// Build the sequence for `items`.
    pub fn from_items<S: AsRef<str>>(items: &[S]) -> Self {
        Self {
            entries: build_sequence(items),
            real_len: items.len(),
            key: content_key(items),
        }
    }

    /// Total length including placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the placeholders are present even for no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of caller items.
    #[must_use]
    pub const fn real_len(&self) -> usize {
        self.real_len
    }

    /// Check whether any item can be selected.
    #[must_use]
    pub const fn has_selectable(&self) -> bool {
        self.real_len > 0
    }

    /// Content key the sequence was built from.
    #[must_use]
    pub const fn key(&self) -> u64 {
        self.key
    }

    /// All labels, placeholders included.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.entries
    }

    /// The caller's items without placeholders.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.entries[PADDING_COUNT..PADDING_COUNT + self.real_len]
    }

    /// Check whether the sequence was built from exactly `items`.
    ///
    /// The content key rejects most changed lists; equal keys are confirmed
    /// label by label.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, items: &[S]) -> bool {
        items.len() == self.real_len
            && content_key(items) == self.key
            && self
                .items()
                .iter()
                .zip(items)
                .all(|(have, want)| have == want.as_ref())
    }

    /// Label at a sequence index.
    #[must_use]
    pub fn get(&self, sequence_index: usize) -> Option<&str> {
        self.entries.get(sequence_index).map(String::as_str)
    }

    /// Map a sequence index to the caller's index. `None` for placeholders.
    #[must_use]
    pub fn real_index(&self, sequence_index: usize) -> Option<usize> {
        sequence_index
            .checked_sub(PADDING_COUNT)
            .filter(|&i| i < self.real_len)
    }

    /// Map a caller index to its sequence index, clamping into range.
    #[must_use]
    pub fn sequence_index(&self, real_index: usize) -> usize {
        real_index.min(self.real_len.saturating_sub(1)) + PADDING_COUNT
    }

    /// Check whether a sequence index is a placeholder.
    #[must_use]
    pub fn is_filler(&self, sequence_index: usize) -> bool {
        self.real_index(sequence_index).is_none()
    }
}

//! Parameter row types
//!
//! The editable key/value rows backing the console form.

use serde::{Deserialize, Serialize};

/// One user-editable key/value pair contributing to the tested request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRow {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
}

impl ParameterRow {
    /// Creates a row with the given key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The ordered, mutable parameter row store.
///
/// Holds at least one row at all times: removing the last remaining row is
/// a silent no-op, so the form never reaches an unusable empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterRows {
    items: Vec<ParameterRow>,
}

impl ParameterRows {
    /// Creates a store holding a single empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: vec![ParameterRow::default()],
        }
    }

    /// Appends a new empty row to the end of the store.
    pub fn add(&mut self) {
        self.items.push(ParameterRow::default());
    }

    /// Removes the row at `index`.
    ///
    /// No-op when only one row remains or when the index is out of bounds.
    pub fn remove(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Replaces the key of the row at `index`, if present.
    pub fn set_key(&mut self, index: usize, key: impl Into<String>) {
        if let Some(row) = self.items.get_mut(index) {
            row.key = key.into();
        }
    }

    /// Replaces the value of the row at `index`, if present.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.items.get_mut(index) {
            row.value = value.into();
        }
    }

    /// Returns the current ordered rows, reflecting in-progress edits.
    #[must_use]
    pub fn all(&self) -> &[ParameterRow] {
        &self.items
    }

    /// Returns the number of rows. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the store never drops below one row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ParameterRows {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ParameterRow> for ParameterRows {
    /// Collects rows into a store. An empty iterator still yields a store
    /// with one empty row, preserving the never-empty invariant.
    fn from_iter<T: IntoIterator<Item = ParameterRow>>(iter: T) -> Self {
        let items: Vec<ParameterRow> = iter.into_iter().collect();
        if items.is_empty() {
            Self::new()
        } else {
            Self { items }
        }
    }
}

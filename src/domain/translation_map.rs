// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resolution cache.

use crate::domain::TranslationKey;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Every translation resolved so far, keyed by normalized key.
///
/// Entries are kept sorted by key so the dumped file is stable between runs.
/// Serializes as a flat JSON object of strings.
///
/// # Examples
///
/// ```
/// use mcp_translations::domain::{TranslationKey, TranslationMap};
///
/// let mut map = TranslationMap::new();
/// map.insert(TranslationKey::from("tool-description"), "Does a thing".to_string());
///
/// assert_eq!(map.get(&TranslationKey::from("TOOL_DESCRIPTION")), Some("Does a thing"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap(BTreeMap<TranslationKey, String>);

impl TranslationMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        TranslationMap(BTreeMap::new())
    }

    /// Returns the resolved value for `key`, if any.
    pub fn get(&self, key: &TranslationKey) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` has been resolved.
    pub fn contains_key(&self, key: &TranslationKey) -> bool {
        self.0.contains_key(key)
    }

    /// Records a resolution, returning the previous value if there was one.
    pub fn insert(&mut self, key: TranslationKey, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Number of resolved keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been resolved.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the resolutions in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, TranslationKey, String> {
        self.0.iter()
    }
}

impl FromIterator<(TranslationKey, String)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (TranslationKey, String)>>(iter: I) -> Self {
        TranslationMap(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TranslationMap {
    type Item = (&'a TranslationKey, &'a String);
    type IntoIter = btree_map::Iter<'a, TranslationKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

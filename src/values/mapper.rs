// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::OnceLock;

/// Two-way name-remapping table.
///
/// Input mappers pair an externally visible value name (key) with a declared
/// field name (value); output mappers pair a declared field name (key) with
/// its published replacement (value). Both directions are queryable, which the
/// rule engine relies on when it resolves shared logical inputs across two
/// nodes. Inserting a pair whose key or value is already present replaces the
/// old pairing in both directions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameMapper {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl NameMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared empty table for processors that declare no remapping.
    pub fn empty() -> &'static NameMapper {
        static EMPTY: OnceLock<NameMapper> = OnceLock::new();
        EMPTY.get_or_init(NameMapper::new)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(old_value) = self.forward.insert(key.clone(), value.clone()) {
            self.reverse.remove(&old_value);
        }
        if let Some(old_key) = self.reverse.insert(value, key) {
            self.forward.remove(&old_key);
        }
    }

    /// Follow the stored direction: key to value.
    pub fn value_for(&self, key: &str) -> Option<&str> {
        self.forward.get(key).map(String::as_str)
    }

    /// Invert the stored direction: value to key.
    pub fn key_for(&self, value: &str) -> Option<&str> {
        self.reverse.get(value).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.forward.contains_key(key)
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.reverse.contains_key(value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.forward.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.forward.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameMapper {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapper = NameMapper::new();
        for (key, value) in iter {
            mapper.insert(key, value);
        }
        mapper
    }
}

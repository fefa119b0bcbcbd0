// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Type tag carried by every declared value slot.
///
/// Tags are explicit rather than Rust types so that slots declared by
/// independently authored processors can be compared at build time. A tag may
/// list wider tags it can stand in for; assignability is the covariant check
/// used when wiring a producer's output to a consumer's input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueType {
    name: String,
    assignable_to: Vec<String>,
}

impl ValueType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assignable_to: Vec::new(),
        }
    }

    /// Declare a wider tag a value of this type can satisfy.
    pub fn assignable_to(mut self, name: impl Into<String>) -> Self {
        self.assignable_to.push(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Can a value of the `concrete` type be used where `self` is declared?
    pub fn is_assignable_from(&self, concrete: &ValueType) -> bool {
        self.name == concrete.name || concrete.assignable_to.iter().any(|wider| *wider == self.name)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_type_is_assignable() {
        let map = ValueType::new("map");
        assert!(map.is_assignable_from(&ValueType::new("map")));
    }

    #[test]
    fn widening_is_assignable() {
        let map = ValueType::new("map");
        let overview = ValueType::new("overview_map").assignable_to("map");
        assert!(map.is_assignable_from(&overview));
    }

    #[test]
    fn narrowing_is_rejected() {
        let map = ValueType::new("map");
        let overview = ValueType::new("overview_map").assignable_to("map");
        assert!(!overview.is_assignable_from(&map));
    }

    #[test]
    fn unrelated_types_are_rejected() {
        let map = ValueType::new("map");
        assert!(!map.is_assignable_from(&ValueType::new("image")));
    }
}

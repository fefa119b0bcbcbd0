// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::values::ValueType;
use std::hash::{Hash, Hasher};

/// An input slot of a node, under its externally visible name.
///
/// Identity is the name alone. The type is deliberately excluded so that a
/// producer and a consumer disagreeing on a shared name surface as a type
/// conflict instead of as a missing input.
#[derive(Debug, Clone)]
pub struct InputDescriptor {
    pub name: String,
    pub value_type: ValueType,
    /// Declared field this descriptor was computed from.
    pub field: String,
    pub has_default: bool,
    pub pass_through: bool,
}

impl PartialEq for InputDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for InputDescriptor {}

impl Hash for InputDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// An output slot of a node, under its published name.
#[derive(Debug, Clone)]
pub struct OutputDescriptor {
    pub name: String,
    pub value_type: ValueType,
    /// Declared field this descriptor was computed from.
    pub field: String,
    /// Internal/debug output that may be silently renamed on collision.
    pub renamable: bool,
}

impl PartialEq for OutputDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for OutputDescriptor {}

impl Hash for OutputDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_type() {
        let first = InputDescriptor {
            name: "map".to_string(),
            value_type: ValueType::new("map"),
            field: "map".to_string(),
            has_default: false,
            pass_through: false,
        };
        let second = InputDescriptor {
            value_type: ValueType::new("image"),
            ..first.clone()
        };
        assert_eq!(first, second);
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::WELL_KNOWN_VALUES;
use crate::graph::NodeId;
use crate::values::ValueType;
use std::collections::HashMap;

/// Who currently provides a value name.
#[derive(Debug, Clone, PartialEq)]
pub enum Provider {
    /// Supplied by the caller (attribute or well-known internal value). No
    /// producing node, so no recorded type.
    External,
    /// Produced by a compiled node, with the type it was registered under.
    Node { id: NodeId, value_type: ValueType },
}

/// Construction-time table from value name to its current provider.
///
/// Scratch state local to one build invocation; nothing here survives into
/// the compiled graph. The provider of a name moves forward as pass-through
/// inputs re-point it at the transforming node.
#[derive(Debug, Default)]
pub struct ValueNamespace {
    providers: HashMap<String, Provider>,
}

impl ValueNamespace {
    /// Table pre-seeded with the well-known internal names and the caller's
    /// attributes, all externally supplied.
    pub fn with_attributes<'a>(attributes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut namespace = Self::default();
        for name in WELL_KNOWN_VALUES {
            namespace
                .providers
                .insert((*name).to_string(), Provider::External);
        }
        for name in attributes {
            namespace.providers.insert(name.to_string(), Provider::External);
        }
        namespace
    }

    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Record `id` as the current producer of `name` with the given type.
    pub fn register(&mut self, name: String, id: NodeId, value_type: ValueType) {
        self.providers.insert(name, Provider::Node { id, value_type });
    }
}

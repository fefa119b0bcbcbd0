// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Author-declared ordering rules between processor kinds.
//!
//! Rules impose edges beyond what data flow implies. A rule names a required
//! kind (the nodes that gain predecessors) and a dependent kind (the nodes
//! that become predecessors), optionally conditioned on the two nodes sharing
//! logical inputs under possibly different local names.

use crate::graph::{NodeId, ProcessorNode};
use serde::Deserialize;
use std::fmt;

/// One shared logical input required by a dependency rule.
///
/// Written `"map"` in configuration when both sides use the same local name,
/// or `"map;overviewMap"` to pair the required-side local name with the
/// dependent-side one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonInput {
    required: String,
    dependent: String,
}

impl CommonInput {
    pub fn new(required: impl Into<String>, dependent: impl Into<String>) -> Self {
        Self {
            required: required.into(),
            dependent: dependent.into(),
        }
    }

    /// Parse the `"name"` / `"left;right"` configuration form.
    pub fn parse(entry: &str) -> Self {
        match entry.split_once(';') {
            Some((left, right)) => Self::new(left, right),
            None => Self::new(entry, entry),
        }
    }

    /// Local input name on the required-side node.
    pub fn required(&self) -> &str {
        &self.required
    }

    /// Local input name on the dependent-side node.
    pub fn dependent(&self) -> &str {
        &self.dependent
    }
}

impl From<&str> for CommonInput {
    fn from(entry: &str) -> Self {
        Self::parse(entry)
    }
}

impl fmt::Display for CommonInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required == self.dependent {
            f.write_str(&self.required)
        } else {
            write!(f, "{};{}", self.required, self.dependent)
        }
    }
}

impl<'de> Deserialize<'de> for CommonInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entry = String::deserialize(deserializer)?;
        Ok(CommonInput::parse(&entry))
    }
}

/// An ordering rule between two processor kinds.
///
/// Every node of the dependent kind becomes a predecessor of every node of
/// the required kind, either unconditionally (no common inputs) or whenever
/// the two nodes share all the listed logical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyRule {
    /// Kind of the nodes that gain predecessors.
    pub required: String,
    /// Kind of the nodes that become predecessors.
    pub dependent: String,
    /// Logical inputs both nodes must share for the rule to apply; empty
    /// applies unconditionally.
    #[serde(default)]
    pub common_inputs: Vec<CommonInput>,
}

impl DependencyRule {
    pub fn new(required: impl Into<String>, dependent: impl Into<String>) -> Self {
        Self {
            required: required.into(),
            dependent: dependent.into(),
            common_inputs: Vec::new(),
        }
    }

    pub fn common_input(mut self, entry: &str) -> Self {
        self.common_inputs.push(CommonInput::parse(entry));
        self
    }
}

/// Collect the edges a rule set implies over the compiled nodes, as
/// `(gaining node, new predecessor)` pairs.
pub(crate) fn rule_edges(rules: &[DependencyRule], nodes: &[ProcessorNode]) -> Vec<(NodeId, NodeId)> {
    let mut edges = Vec::new();
    for rule in rules {
        for node in nodes.iter().filter(|node| node.kind() == rule.required) {
            for dependent in nodes.iter().filter(|dependent| dependent.kind() == rule.dependent) {
                // A node cannot precede itself.
                if dependent.id() == node.id() {
                    continue;
                }
                if rule.common_inputs.is_empty() || shares_all_inputs(rule, node, dependent) {
                    edges.push((node.id(), dependent.id()));
                }
            }
        }
    }
    edges
}

/// Remap-aware check that two nodes operate on the same logical values.
///
/// The common input may live under different local names on the two sides,
/// e.g. the overview-map processor calls its map `overviewMap` while the
/// style processor simply calls it `map`. The required-side local name is
/// resolved to its externally visible name through that node's input mapper,
/// and the visible name back to a local name through the dependent's mapper.
fn shares_all_inputs(rule: &DependencyRule, node: &ProcessorNode, dependent: &ProcessorNode) -> bool {
    rule.common_inputs.iter().all(|common| {
        let visible = node
            .input_mapper()
            .key_for(common.required())
            .unwrap_or_else(|| common.required());
        let candidate = dependent.input_mapper().value_for(visible).unwrap_or(visible);
        candidate == common.dependent()
    })
}

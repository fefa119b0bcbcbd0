// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-pass construction of the processor dependency graph.
//!
//! Processors are examined in caller order. Each one resolves its inputs
//! against the namespace (wiring data-flow edges and detecting type
//! conflicts), then registers its outputs (detecting name collisions), then
//! re-points any pass-through inputs at itself. Once every node exists, the
//! dependency rule engine layers author-declared edges on top, and the
//! structural checks reject cycles and dropped processors.

use crate::errors::BuildError;
use crate::graph::namespace::{Provider, ValueNamespace};
use crate::graph::rules::rule_edges;
use crate::graph::validation::{validate_acyclic, verify_complete};
use crate::graph::{DependencyGraph, DependencyRule, NodeId, ProcessorNode};
use crate::observability::messages::build::{
    BuildCompleted, BuildStarted, OutputRenamed, RuleEdgeAdded,
};
use crate::observability::messages::StructuredLog;
use crate::traits::Processor;
use crate::values::{extract_inputs, extract_outputs};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Compiles processor collections into [`DependencyGraph`]s.
///
/// The builder carries only the globally configured dependency rules; all
/// per-build state is scratch. One builder can therefore compile any number
/// of independent processor collections, concurrently included, as long as
/// the rule list is not mutated during a build.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    rules: Vec<DependencyRule>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with globally configured ordering rules, usually loaded via
    /// [`crate::config::load_rules`].
    pub fn with_rules(rules: Vec<DependencyRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[DependencyRule] {
        &self.rules
    }

    /// Compile `processors` against the externally supplied `attributes`.
    ///
    /// The processor order is part of the contract: it decides which
    /// processor first claims a contested output name, and which nodes are
    /// recorded as roots.
    pub fn build(
        &self,
        processors: &[Arc<dyn Processor>],
        attributes: &HashSet<String>,
    ) -> Result<DependencyGraph, BuildError> {
        BuildStarted {
            processor_count: processors.len(),
            attribute_count: attributes.len(),
        }
        .log();

        let mut namespace = ValueNamespace::with_attributes(attributes.iter().map(String::as_str));
        let mut nodes: Vec<ProcessorNode> = Vec::with_capacity(processors.len());
        let mut roots: Vec<NodeId> = Vec::new();

        for processor in processors {
            let id = NodeId(nodes.len());
            let inputs = extract_inputs(processor.as_ref())?;
            let mut outputs = extract_outputs(processor.as_ref())?;

            let mut predecessors: BTreeSet<NodeId> = BTreeSet::new();
            for input in &inputs {
                match namespace.provider(&input.name) {
                    Some(Provider::Node { id: producer, value_type }) => {
                        if input.value_type.is_assignable_from(value_type) {
                            predecessors.insert(*producer);
                        } else {
                            return Err(BuildError::TypeConflict {
                                producer: nodes[producer.index()].name().to_string(),
                                consumer: processor.name().to_string(),
                                value: input.name.clone(),
                                produced: value_type.name().to_string(),
                                expected: input.value_type.name().to_string(),
                            });
                        }
                    }
                    // Externally supplied: satisfied without an edge.
                    Some(Provider::External) => {}
                    None => {
                        if !input.has_default {
                            return Err(BuildError::MissingInput {
                                processor: processor.name().to_string(),
                                input: input.name.clone(),
                            });
                        }
                    }
                }
            }
            if predecessors.is_empty() {
                roots.push(id);
            }

            for output in outputs.iter_mut() {
                if namespace.contains(&output.name) {
                    if output.renamable {
                        let renamed = fresh_name(&output.name, |candidate| namespace.contains(candidate));
                        OutputRenamed {
                            processor: processor.name(),
                            from: &output.name,
                            to: &renamed,
                        }
                        .log();
                        output.name = renamed;
                    } else {
                        return Err(match namespace.provider(&output.name) {
                            Some(Provider::Node { id: previous, .. }) => {
                                // The previous producer may be an earlier
                                // output of this very processor.
                                let first = if previous.index() < nodes.len() {
                                    nodes[previous.index()].name()
                                } else {
                                    processor.name()
                                };
                                BuildError::DuplicateOutput {
                                    first: first.to_string(),
                                    second: processor.name().to_string(),
                                    output: output.name.clone(),
                                }
                            }
                            _ => BuildError::OutputCollidesWithAttribute {
                                processor: processor.name().to_string(),
                                output: output.name.clone(),
                            },
                        });
                    }
                }
                namespace.register(output.name.clone(), id, output.value_type.clone());
            }

            // Pass-through inputs republish under their own name, so later
            // consumers depend on this node instead of the original producer.
            for input in &inputs {
                if input.pass_through {
                    namespace.register(input.name.clone(), id, input.value_type.clone());
                }
            }

            nodes.push(ProcessorNode::new(
                id,
                Arc::clone(processor),
                inputs,
                outputs,
                predecessors,
            ));
        }

        let mut all_rules = self.rules.clone();
        for node in &nodes {
            if let Some(custom) = node.processor().custom_dependencies() {
                all_rules.extend(custom.create_dependencies(&nodes));
            }
        }
        for (gaining, predecessor) in rule_edges(&all_rules, &nodes) {
            RuleEdgeAdded {
                node: nodes[gaining.index()].name(),
                predecessor: nodes[predecessor.index()].name(),
            }
            .log();
            nodes[gaining.index()].add_predecessor(predecessor);
        }

        validate_acyclic(&nodes)?;

        let graph = DependencyGraph::new(nodes, roots);
        verify_complete(&graph)?;

        BuildCompleted {
            node_count: graph.len(),
            root_count: graph.root_ids().len(),
        }
        .log();
        Ok(graph)
    }
}

/// Collision-free renaming for renamable (debug) outputs.
///
/// Pure and deterministic: the only state consulted is the `taken` predicate,
/// and the first free counter suffix wins.
fn fresh_name(base: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut counter = 1usize;
    loop {
        let candidate = format!("{}_{}", base, counter);
        if !taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

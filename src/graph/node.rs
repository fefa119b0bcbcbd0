// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::Processor;
use crate::values::{InputDescriptor, NameMapper, OutputDescriptor};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Identity of a node inside one compiled graph: its position in the
/// caller-supplied processor order.
///
/// Identity is positional, never structural. Two nodes wrapping
/// indistinguishable processor instances are still distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One compiled processor: its resolved value slots and the nodes whose
/// completion it requires.
#[derive(Clone)]
pub struct ProcessorNode {
    id: NodeId,
    processor: Arc<dyn Processor>,
    inputs: Vec<InputDescriptor>,
    outputs: Vec<OutputDescriptor>,
    input_mapper: NameMapper,
    output_mapper: NameMapper,
    predecessors: BTreeSet<NodeId>,
}

impl ProcessorNode {
    pub(crate) fn new(
        id: NodeId,
        processor: Arc<dyn Processor>,
        inputs: Vec<InputDescriptor>,
        outputs: Vec<OutputDescriptor>,
        predecessors: BTreeSet<NodeId>,
    ) -> Self {
        let input_mapper = processor.input_mapper().clone();
        let output_mapper = processor.output_mapper().clone();
        Self {
            id,
            processor,
            inputs,
            outputs,
            input_mapper,
            output_mapper,
            predecessors,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.processor.name()
    }

    pub fn kind(&self) -> &str {
        self.processor.kind()
    }

    pub fn processor(&self) -> &Arc<dyn Processor> {
        &self.processor
    }

    /// Resolved input slots, under their externally visible names.
    pub fn inputs(&self) -> &[InputDescriptor] {
        &self.inputs
    }

    /// Resolved output slots, under their published (possibly renamed) names.
    pub fn outputs(&self) -> &[OutputDescriptor] {
        &self.outputs
    }

    pub fn input_mapper(&self) -> &NameMapper {
        &self.input_mapper
    }

    pub fn output_mapper(&self) -> &NameMapper {
        &self.output_mapper
    }

    /// Nodes that must complete before this node may run.
    pub fn predecessors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.predecessors.iter().copied()
    }

    pub fn requires(&self, other: NodeId) -> bool {
        self.predecessors.contains(&other)
    }

    pub(crate) fn add_predecessor(&mut self, other: NodeId) {
        self.predecessors.insert(other);
    }
}

impl fmt::Debug for ProcessorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorNode")
            .field("id", &self.id)
            .field("processor", &self.processor.name())
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("predecessors", &self.predecessors)
            .finish()
    }
}

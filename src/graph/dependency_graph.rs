use crate::graph::{NodeId, ProcessorNode};
use crate::traits::Processor;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// The compiled artifact of a build: every processor node in declaration
/// order plus the roots an external scheduler starts from.
///
/// The graph upholds one contract for its consumer: a node may only run once
/// all of its predecessors have completed, and the edges are acyclic. The
/// graph itself is immutable once returned.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: Vec<ProcessorNode>,
    roots: Vec<NodeId>,
}

impl DependencyGraph {
    pub(crate) fn new(nodes: Vec<ProcessorNode>, roots: Vec<NodeId>) -> Self {
        Self { nodes, roots }
    }

    /// All compiled nodes, in the order the processors were supplied.
    pub fn nodes(&self) -> &[ProcessorNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &ProcessorNode {
        &self.nodes[id.index()]
    }

    /// Nodes with no predecessor among the supplied processors.
    pub fn roots(&self) -> impl Iterator<Item = &ProcessorNode> {
        self.roots.iter().map(|id| &self.nodes[id.index()])
    }

    pub fn root_ids(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every processor reachable in the compiled graph, in declaration order.
    pub fn all_processors(&self) -> Vec<Arc<dyn Processor>> {
        let mut reachable: Vec<NodeId> = self.reachable_ids().into_iter().collect();
        reachable.sort();
        reachable
            .into_iter()
            .map(|id| Arc::clone(self.nodes[id.index()].processor()))
            .collect()
    }

    /// Ids of every node reachable from the roots: a node is reached once any
    /// of its predecessors is, starting from the root set itself.
    pub(crate) fn reachable_ids(&self) -> HashSet<NodeId> {
        let mut successors: Vec<Vec<NodeId>> = vec![Vec::new(); self.nodes.len()];
        for node in &self.nodes {
            for predecessor in node.predecessors() {
                successors[predecessor.index()].push(node.id());
            }
        }

        let mut reachable: HashSet<NodeId> = HashSet::new();
        let mut frontier: Vec<NodeId> = self.roots.clone();
        while let Some(id) = frontier.pop() {
            if reachable.insert(id) {
                frontier.extend(successors[id.index()].iter().copied());
            }
        }
        reachable
    }
}

impl fmt::Display for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            let predecessors: Vec<&str> = node
                .predecessors()
                .map(|id| self.nodes[id.index()].name())
                .collect();
            if predecessors.is_empty() {
                writeln!(f, "+ {}", node.name())?;
            } else {
                writeln!(f, "+ {} <- [{}]", node.name(), predecessors.join(", "))?;
            }
        }
        Ok(())
    }
}

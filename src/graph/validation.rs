// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural validation of the compiled graph.
//!
//! Two checks run once every edge is in place:
//!
//! 1. **Cycle detection**: depth-first search with recursion-stack tracking
//!    over the successor edges, reporting the exact cycle path in processor
//!    names. Data-flow wiring alone cannot form a cycle (a node only ever
//!    depends on earlier nodes), but dependency rules can close one.
//! 2. **Completeness**: every supplied processor must be reachable from the
//!    roots. A miss indicates an internal construction bug rather than a user
//!    configuration error, and is never recoverable.

use crate::errors::BuildError;
use crate::graph::{DependencyGraph, ProcessorNode};

/// Forward adjacency (node index to the indexes of nodes that require it),
/// derived from the predecessor sets.
fn successors(nodes: &[ProcessorNode]) -> Vec<Vec<usize>> {
    let mut successors = vec![Vec::new(); nodes.len()];
    for node in nodes {
        for predecessor in node.predecessors() {
            successors[predecessor.index()].push(node.id().index());
        }
    }
    successors
}

/// Reject any cycle in the combined data-flow and rule edges.
pub(crate) fn validate_acyclic(nodes: &[ProcessorNode]) -> Result<(), BuildError> {
    let successors = successors(nodes);
    let mut visited = vec![false; nodes.len()];
    let mut in_stack = vec![false; nodes.len()];
    let mut path = Vec::new();

    for start in 0..nodes.len() {
        if !visited[start] {
            if let Some(cycle) = dfs_cycle(start, nodes, &successors, &mut visited, &mut in_stack, &mut path) {
                return Err(BuildError::CycleDetected { cycle });
            }
        }
    }
    Ok(())
}

fn dfs_cycle(
    node: usize,
    nodes: &[ProcessorNode],
    successors: &[Vec<usize>],
    visited: &mut [bool],
    in_stack: &mut [bool],
    path: &mut Vec<usize>,
) -> Option<Vec<String>> {
    visited[node] = true;
    in_stack[node] = true;
    path.push(node);

    for &next in &successors[node] {
        if !visited[next] {
            if let Some(cycle) = dfs_cycle(next, nodes, successors, visited, in_stack, path) {
                return Some(cycle);
            }
        } else if in_stack[next] {
            // Found a back edge; the cycle is the path from `next` onwards.
            let cycle_start = path.iter().position(|&entry| entry == next).unwrap();
            let mut cycle: Vec<String> = path[cycle_start..]
                .iter()
                .map(|&entry| nodes[entry].name().to_string())
                .collect();
            cycle.push(nodes[next].name().to_string());
            return Some(cycle);
        }
    }

    in_stack[node] = false;
    path.pop();
    None
}

/// Verify the compiled graph contains every supplied processor.
pub(crate) fn verify_complete(graph: &DependencyGraph) -> Result<(), BuildError> {
    let reachable = graph.reachable_ids();
    let missing: Vec<String> = graph
        .nodes()
        .iter()
        .filter(|node| !reachable.contains(&node.id()))
        .map(|node| node.name().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BuildError::IncompleteGraph {
            graph: graph.to_string(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing::TestProcessor;
    use crate::graph::{DependencyGraph, NodeId, ProcessorNode};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn node(index: usize, name: &str, predecessors: &[usize]) -> ProcessorNode {
        ProcessorNode::new(
            NodeId(index),
            Arc::new(TestProcessor::new(name)),
            Vec::new(),
            Vec::new(),
            predecessors.iter().map(|&entry| NodeId(entry)).collect::<BTreeSet<_>>(),
        )
    }

    #[test]
    fn linear_chain_is_acyclic() {
        let nodes = vec![node(0, "a", &[]), node(1, "b", &[0]), node(2, "c", &[1])];
        assert!(validate_acyclic(&nodes).is_ok());
    }

    #[test]
    fn two_node_cycle_is_reported_with_path() {
        let nodes = vec![node(0, "a", &[1]), node(1, "b", &[0])];
        let error = validate_acyclic(&nodes).unwrap_err();
        match error {
            BuildError::CycleDetected { cycle } => {
                assert_eq!(cycle.len(), 3);
                assert_eq!(cycle.first(), cycle.last());
            }
            other => panic!("expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn self_cycle_is_reported() {
        let nodes = vec![node(0, "a", &[0])];
        assert!(matches!(
            validate_acyclic(&nodes),
            Err(BuildError::CycleDetected { .. })
        ));
    }

    #[test]
    fn diamond_is_acyclic() {
        let nodes = vec![
            node(0, "a", &[]),
            node(1, "b", &[0]),
            node(2, "c", &[0]),
            node(3, "d", &[1, 2]),
        ];
        assert!(validate_acyclic(&nodes).is_ok());
    }

    #[test]
    fn unreachable_node_fails_completeness() {
        // A non-root node with no predecessors can only come from a
        // construction bug; build one by hand.
        let graph = DependencyGraph::new(vec![node(0, "stranded", &[])], Vec::new());
        let error = verify_complete(&graph).unwrap_err();
        match error {
            BuildError::IncompleteGraph { missing, .. } => {
                assert_eq!(missing, vec!["stranded".to_string()]);
            }
            other => panic!("expected IncompleteGraph, got {:?}", other),
        }
    }

    #[test]
    fn connected_graph_passes_completeness() {
        let graph = DependencyGraph::new(
            vec![node(0, "a", &[]), node(1, "b", &[0])],
            vec![NodeId(0)],
        );
        assert!(verify_complete(&graph).is_ok());
    }
}

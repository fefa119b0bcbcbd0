// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod builder;
mod dependency_graph;
mod namespace;
mod node;
mod rules;
mod validation;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub(crate) mod testing;

pub use builder::GraphBuilder;
pub use dependency_graph::DependencyGraph;
pub use node::{NodeId, ProcessorNode};
pub use rules::{CommonInput, DependencyRule};

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dependency graph compilation events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Graph compilation started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BuildStarted {
    pub processor_count: usize,
    pub attribute_count: usize,
}

impl Display for BuildStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting dependency graph build for {} processors with {} attributes",
            self.processor_count, self.attribute_count
        )
    }
}

impl StructuredLog for BuildStarted {
    fn log(&self) {
        tracing::info!(
            processor_count = self.processor_count,
            attribute_count = self.attribute_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            processor_count = self.processor_count,
            attribute_count = self.attribute_count,
        )
    }
}

/// Graph compilation completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BuildCompleted {
    pub node_count: usize,
    pub root_count: usize,
}

impl Display for BuildCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dependency graph build completed: {} nodes, {} roots",
            self.node_count, self.root_count
        )
    }
}

impl StructuredLog for BuildCompleted {
    fn log(&self) {
        tracing::info!(
            node_count = self.node_count,
            root_count = self.root_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            node_count = self.node_count,
            root_count = self.root_count,
        )
    }
}

/// A debug output collided with an existing name and was silently renamed.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct OutputRenamed<'a> {
    pub processor: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

impl Display for OutputRenamed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Renamed debug output '{}' of processor '{}' to '{}' to avoid a name collision",
            self.from, self.processor, self.to
        )
    }
}

impl StructuredLog for OutputRenamed<'_> {
    fn log(&self) {
        tracing::warn!(
            processor = self.processor,
            from = self.from,
            to = self.to,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            processor = self.processor,
            from = self.from,
            to = self.to,
        )
    }
}

/// A dependency rule added an edge beyond what data flow implies.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct RuleEdgeAdded<'a> {
    pub node: &'a str,
    pub predecessor: &'a str,
}

impl Display for RuleEdgeAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dependency rule: '{}' now requires '{}'",
            self.node, self.predecessor
        )
    }
}

impl StructuredLog for RuleEdgeAdded<'_> {
    fn log(&self) {
        tracing::debug!(
            node = self.node,
            predecessor = self.predecessor,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            node = self.node,
            predecessor = self.predecessor,
        )
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself as a `tracing` event with typed fields.

pub mod build;

use tracing::Span;

/// Implemented by message types that emit themselves as structured tracing
/// events.
pub trait StructuredLog {
    /// Emit the message at its designated level with typed fields.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}

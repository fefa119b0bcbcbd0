// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Message types follow a struct-based pattern with `Display` trait
//! implementation to keep diagnostic strings out of the compilation code and
//! provide consistent, structured logging output.

pub mod messages;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // rule configuration + well-known values
pub mod errors;     // error handling
pub mod graph;      // dependency graph compiler
pub mod observability;
pub mod traits;     // processor abstractions
pub mod values;     // value slots + schemas

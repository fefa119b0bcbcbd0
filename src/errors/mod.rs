// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod build;
mod config;

pub use build::{BuildError, MappingDirection};
pub use config::ConfigError;

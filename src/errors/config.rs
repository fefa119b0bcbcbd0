// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for rule configuration loading.

use thiserror::Error;

/// Errors raised while loading a rule configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read rule configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML or does not match the expected shape.
    #[error("failed to parse rule configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

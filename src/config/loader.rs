// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use crate::graph::DependencyRule;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Globally configured dependency rules, typically loaded from a YAML file.
///
/// Each rule names the required kind (the nodes that gain predecessors), the
/// dependent kind (the nodes that become predecessors), and optionally the
/// logical inputs the two nodes must share. A common input is written
/// `"name"` or `"requiredName;dependentName"`.
///
/// # Example
/// ```yaml
/// rules:
///   - required: set_style
///     dependent: add_overview_layers
///     common_inputs: ["map;overviewMap"]
///   - required: render_report
///     dependent: write_headers
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub rules: Vec<DependencyRule>,
}

/// Load a rule configuration from a YAML file.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<RuleConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RuleConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configurable processor stub for graph tests.

use crate::graph::{DependencyRule, ProcessorNode};
use crate::traits::{CustomDependencies, Processor};
use crate::values::{InputSchema, NameMapper, OutputSchema};

type RuleFactory = Box<dyn Fn(&[ProcessorNode]) -> Vec<DependencyRule> + Send + Sync>;

pub(crate) struct TestDependencies {
    factory: RuleFactory,
}

impl CustomDependencies for TestDependencies {
    fn create_dependencies(&self, nodes: &[ProcessorNode]) -> Vec<DependencyRule> {
        (self.factory)(nodes)
    }
}

/// Builder-style processor whose declarations are whatever the test needs.
pub(crate) struct TestProcessor {
    name: String,
    kind: String,
    input_schema: Option<InputSchema>,
    output_schema: OutputSchema,
    input_mapper: NameMapper,
    output_mapper: NameMapper,
    input_prefix: Option<String>,
    output_prefix: Option<String>,
    custom: Option<TestDependencies>,
}

impl TestProcessor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: name.to_string(),
            input_schema: None,
            output_schema: OutputSchema::new(),
            input_mapper: NameMapper::new(),
            output_mapper: NameMapper::new(),
            input_prefix: None,
            output_prefix: None,
            custom: None,
        }
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }

    pub fn inputs(mut self, schema: InputSchema) -> Self {
        self.input_schema = Some(schema);
        self
    }

    pub fn outputs(mut self, schema: OutputSchema) -> Self {
        self.output_schema = schema;
        self
    }

    pub fn input_mapping(mut self, visible: &str, field: &str) -> Self {
        self.input_mapper.insert(visible, field);
        self
    }

    pub fn output_mapping(mut self, field: &str, published: &str) -> Self {
        self.output_mapper.insert(field, published);
        self
    }

    pub fn with_input_prefix(mut self, prefix: &str) -> Self {
        self.input_prefix = Some(prefix.to_string());
        self
    }

    pub fn with_output_prefix(mut self, prefix: &str) -> Self {
        self.output_prefix = Some(prefix.to_string());
        self
    }

    pub fn custom_rules(
        mut self,
        factory: impl Fn(&[ProcessorNode]) -> Vec<DependencyRule> + Send + Sync + 'static,
    ) -> Self {
        self.custom = Some(TestDependencies {
            factory: Box::new(factory),
        });
        self
    }
}

impl Processor for TestProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn input_schema(&self) -> Option<&InputSchema> {
        self.input_schema.as_ref()
    }

    fn output_schema(&self) -> &OutputSchema {
        &self.output_schema
    }

    fn input_mapper(&self) -> &NameMapper {
        &self.input_mapper
    }

    fn output_mapper(&self) -> &NameMapper {
        &self.output_mapper
    }

    fn input_prefix(&self) -> Option<&str> {
        self.input_prefix.as_deref()
    }

    fn output_prefix(&self) -> Option<&str> {
        self.output_prefix.as_deref()
    }

    fn custom_dependencies(&self) -> Option<&dyn CustomDependencies> {
        self.custom
            .as_ref()
            .map(|custom| custom as &dyn CustomDependencies)
    }
}

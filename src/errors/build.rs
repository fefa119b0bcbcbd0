// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while compiling a processor collection into a graph.

use std::fmt;
use thiserror::Error;

/// Which remapping table an unknown mapping was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingDirection {
    Input,
    Output,
}

impl fmt::Display for MappingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingDirection::Input => f.write_str("input"),
            MappingDirection::Output => f.write_str("output"),
        }
    }
}

/// Fatal configuration errors detected while building a dependency graph.
///
/// Every variant is final for the build call: nothing is retried or recovered
/// internally, the processor configuration has to be fixed and the build run
/// again. Messages carry the processor and value names needed to fix the
/// configuration without reading source.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    /// A remapping entry does not correspond to any declared record field.
    #[error(
        "One or more of the {direction} mapping entries of '{processor}' do not match a declared field. The bad mappings are:{}\n\nThe possible field names are:{}\n",
        bullet_list(.bad_mappings),
        bullet_list(.valid_fields)
    )]
    UnknownMapping {
        processor: String,
        direction: MappingDirection,
        bad_mappings: Vec<String>,
        valid_fields: Vec<String>,
    },

    /// Two processors disagree on the type of a shared value name.
    #[error(
        "Type conflict: processor '{producer}' provides an output with name '{value}' and of type \
         '{produced}', while processor '{consumer}' expects an input of that name with type \
         '{expected}'. Rename one of the values in the mappings of the processors."
    )]
    TypeConflict {
        producer: String,
        consumer: String,
        value: String,
        produced: String,
        expected: String,
    },

    /// An input has no producer, is not an attribute, and declares no default.
    #[error("The processor '{processor}' has no value for the input '{input}'.")]
    MissingInput { processor: String, input: String },

    /// A non-renamable output name is already declared as an attribute.
    #[error(
        "Processor '{processor}' provides the output '{output}', which is already declared as an \
         attribute. Rename the output and the corresponding input so that there is no ambiguity \
         over which value a processor consumes."
    )]
    OutputCollidesWithAttribute { processor: String, output: String },

    /// Two processors produce the same non-renamable output name.
    #[error(
        "Multiple processors provide the same output mapping: '{first}' and '{second}' both \
         provide '{output}'. Rename one of the outputs and the corresponding input so that there \
         is no ambiguity over which value a processor consumes."
    )]
    DuplicateOutput {
        first: String,
        second: String,
        output: String,
    },

    /// The combined data-flow and rule edges form a cycle.
    #[error("Cyclic dependency detected: {}", .cycle.join(" -> "))]
    CycleDetected { cycle: Vec<String> },

    /// A supplied processor is absent from the compiled graph. This is an
    /// internal construction bug, not a configuration error.
    #[error(
        "The processor graph:\n{graph}does not contain all the processors, missing:{}",
        bullet_list(.missing)
    )]
    IncompleteGraph { graph: String, missing: Vec<String> },
}

fn bullet_list(items: &[String]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str("\n  * ");
        out.push_str(item);
    }
    out
}

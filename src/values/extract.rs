// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Computes the externally visible value descriptors of a processor.
//!
//! A field's visible name is its remapped name (when the remap table carries
//! one) with the processor's prefix prepended. Before any name is computed,
//! the remap table itself is verified against the declared record: an entry
//! that names no actual field fails the build with the full list of offending
//! entries and the legal field names.

use crate::errors::{BuildError, MappingDirection};
use crate::traits::Processor;
use crate::values::{InputDescriptor, OutputDescriptor};

/// Compute the input descriptors of `processor` under remapping and prefix.
pub fn extract_inputs(processor: &dyn Processor) -> Result<Vec<InputDescriptor>, BuildError> {
    let schema = match processor.input_schema() {
        Some(schema) => schema,
        None => return Ok(Vec::new()),
    };
    let mapper = processor.input_mapper();

    // Input mapper values are field names; every one must exist.
    verify_mappings(
        processor.name(),
        MappingDirection::Input,
        mapper.values().collect(),
        schema.field_names(),
    )?;

    let prefix = processor.input_prefix().unwrap_or("");
    Ok(schema
        .fields()
        .iter()
        .map(|field| {
            let visible = mapper.key_for(&field.name).unwrap_or(&field.name);
            InputDescriptor {
                name: format!("{}{}", prefix, visible),
                value_type: field.value_type.clone(),
                field: field.name.clone(),
                has_default: field.has_default,
                pass_through: field.pass_through,
            }
        })
        .collect())
}

/// Compute the output descriptors of `processor` under remapping and prefix.
pub fn extract_outputs(processor: &dyn Processor) -> Result<Vec<OutputDescriptor>, BuildError> {
    let schema = processor.output_schema();
    let mapper = processor.output_mapper();

    // Output mapper keys are field names; every one must exist.
    verify_mappings(
        processor.name(),
        MappingDirection::Output,
        mapper.keys().collect(),
        schema.field_names(),
    )?;

    let prefix = processor.output_prefix().unwrap_or("");
    Ok(schema
        .fields()
        .iter()
        .map(|field| {
            let visible = mapper.value_for(&field.name).unwrap_or(&field.name);
            OutputDescriptor {
                name: format!("{}{}", prefix, visible),
                value_type: field.value_type.clone(),
                field: field.name.clone(),
                renamable: field.renamable,
            }
        })
        .collect())
}

fn verify_mappings(
    processor_name: &str,
    direction: MappingDirection,
    mapped_names: Vec<&str>,
    field_names: Vec<&str>,
) -> Result<(), BuildError> {
    let mut bad_mappings: Vec<String> = mapped_names
        .iter()
        .filter(|name| !field_names.contains(name))
        .map(|name| name.to_string())
        .collect();
    if bad_mappings.is_empty() {
        return Ok(());
    }
    bad_mappings.sort();

    Err(BuildError::UnknownMapping {
        processor: processor_name.to_string(),
        direction,
        bad_mappings,
        valid_fields: field_names.iter().map(|name| name.to_string()).collect(),
    })
}

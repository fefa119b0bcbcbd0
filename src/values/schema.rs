// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Statically declared record schemas.
//!
//! A processor declares its value slots up front as a list of named, typed
//! fields instead of having a record type introspected at run time. Input
//! fields may be optional (the build succeeds without a producer) or
//! pass-through (republished under the same name after the processor runs);
//! output fields may be renamable (silently renamed on collision, for
//! internal/debug values).

use crate::values::ValueType;

/// One declared input slot.
#[derive(Debug, Clone)]
pub struct InputField {
    pub name: String,
    pub value_type: ValueType,
    pub has_default: bool,
    pub pass_through: bool,
}

impl InputField {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            has_default: false,
            pass_through: false,
        }
    }

    /// Mark the field optional: it carries a default when nothing produces it.
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Republish the field under its own name once this processor completes.
    pub fn pass_through(mut self) -> Self {
        self.pass_through = true;
        self
    }
}

/// One declared output slot.
#[derive(Debug, Clone)]
pub struct OutputField {
    pub name: String,
    pub value_type: ValueType,
    pub renamable: bool,
}

impl OutputField {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            renamable: false,
        }
    }

    /// Internal/debug value: naming collisions are resolved by renaming
    /// instead of rejected.
    pub fn renamable(mut self) -> Self {
        self.renamable = true;
        self
    }
}

/// Declared input record of a processor.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    fields: Vec<InputField>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: InputField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

/// Declared output record of a processor.
#[derive(Debug, Clone, Default)]
pub struct OutputSchema {
    fields: Vec<OutputField>,
}

impl OutputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared empty record for processors that publish nothing.
    pub fn empty() -> &'static OutputSchema {
        static EMPTY: std::sync::OnceLock<OutputSchema> = std::sync::OnceLock::new();
        EMPTY.get_or_init(OutputSchema::new)
    }

    pub fn field(mut self, field: OutputField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[OutputField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

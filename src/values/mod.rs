// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod descriptor;
mod extract;
mod mapper;
mod schema;
mod types;

pub use descriptor::{InputDescriptor, OutputDescriptor};
pub use extract::{extract_inputs, extract_outputs};
pub use mapper::NameMapper;
pub use schema::{InputField, InputSchema, OutputField, OutputSchema};
pub use types::ValueType;

use crate::graph::{DependencyRule, ProcessorNode};
use crate::values::{InputSchema, NameMapper, OutputSchema};

/// A unit of work with declared named/typed input and output value slots.
///
/// The graph compiler treats processors as opaque except for what is declared
/// here: the slots, the name-remapping tables, and the optional prefixes. How
/// a processor actually transforms data is the concern of whatever scheduler
/// consumes the compiled graph.
pub trait Processor: Send + Sync {
    /// Instance identity used in diagnostics.
    fn name(&self) -> &str;

    /// Type tag matched against dependency rules. Distinct instances of one
    /// processor type share a kind.
    fn kind(&self) -> &str {
        self.name()
    }

    /// Declared input record, or `None` for a processor with no inputs.
    fn input_schema(&self) -> Option<&InputSchema> {
        None
    }

    /// Declared output record.
    fn output_schema(&self) -> &OutputSchema {
        OutputSchema::empty()
    }

    /// Remapping from externally visible input names to declared field names.
    fn input_mapper(&self) -> &NameMapper {
        NameMapper::empty()
    }

    /// Remapping from declared output field names to published names.
    fn output_mapper(&self) -> &NameMapper {
        NameMapper::empty()
    }

    /// Prefix prepended to every visible input name.
    fn input_prefix(&self) -> Option<&str> {
        None
    }

    /// Prefix prepended to every published output name.
    fn output_prefix(&self) -> Option<&str> {
        None
    }

    /// Optional capability: contribute ordering rules once the full node list
    /// is known. Checked by presence, never by downcasting.
    fn custom_dependencies(&self) -> Option<&dyn CustomDependencies> {
        None
    }
}

/// Capability for processors that declare ordering rules programmatically.
pub trait CustomDependencies {
    /// Produce additional rules, given every compiled node.
    fn create_dependencies(&self, nodes: &[ProcessorNode]) -> Vec<DependencyRule>;
}

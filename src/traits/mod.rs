pub mod processor;

pub use processor::{CustomDependencies, Processor};

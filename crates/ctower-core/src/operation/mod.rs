//! Operation field extraction module.

pub mod bank;
pub mod feedback;
pub mod labels;
mod parser;
pub mod segments;

pub use parser::{parse_operation_info, ExtractionResult, OperationInfoParser};
pub use segments::{GiroExtractor, LiberacionExtractor};

use crate::models::operation::OperationInfo;

/// Trait for operation text parsers.
///
/// Parsing is total: any input, malformed or empty, yields a complete
/// record with unfound fields left at their defaults.
pub trait OperationParser {
    /// Parse one operation-info text block.
    fn parse(&self, text: &str) -> OperationInfo;
}

/// Trait for field extractors that read one entry per text segment.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from one segment.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in order of appearance.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

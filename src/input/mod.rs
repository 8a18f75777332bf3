//! Graph input: JSON documents and the validator that guards construction.

pub mod document;
pub mod validate;

pub use document::GraphDocument;
pub use validate::{is_valid_input, validate_input};

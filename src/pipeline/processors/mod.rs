//! Per-record stages run between decoding and publishing.

pub mod decoder;
pub mod filter;
pub mod transformer;
pub mod validator;

pub use decoder::decode;
pub use filter::TypeFilter;
pub use transformer::transform;
pub use validator::{SchemaRuleset, Validator};

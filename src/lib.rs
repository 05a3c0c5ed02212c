pub mod ast;
pub mod error;
#[cfg(feature = "arbitrary")]
pub mod fuzz_helper;
pub mod geometry;
pub mod literal;
pub mod mapping;
pub mod to_sql;
pub mod translate;

pub use error::Error;
pub use literal::generate_literal;
pub use mapping::{LiteralMapping, MappingParameters, mapping_for};
pub use translate::{CallRule, Translator};

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::geometry::ShapeKind;

fn kind_name(kind: &Option<ShapeKind>, otherwise: &str) -> String {
    kind.map(|k| k.to_string())
        .unwrap_or_else(|| otherwise.to_string())
}

/// Errors from literal generation and expression translation.
///
/// A call that no rule recognizes is not an error at the rule level: rules
///  return `None` and the [`Translator`](crate::translate::Translator) moves
///  on. It only becomes [`Error::UnsupportedMethod`] once every rule declined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The codec was handed a value it cannot encode: nothing at all, or a
    ///  shape of another kind than the mapping was built for.
    #[error(
        "Invalid input: expected {}, got {}",
        kind_name(expected, "a shape"),
        kind_name(found, "nothing")
    )]
    InvalidInput {
        expected: Option<ShapeKind>,
        found: Option<ShapeKind>,
    },
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
}

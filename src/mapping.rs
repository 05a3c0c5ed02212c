//! Type mappings for the geometric types.
//!
//! A [`LiteralMapping`] ties a [`ShapeKind`] to its store type name and its
//!  wire type tag, and knows how to render values of that kind as literals.
//!  The seven default mappings are built once and shared process-wide; a
//!  mapping with different parameters is a new value, never a mutation.

use std::sync::LazyLock;

use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::{
    error::Error,
    geometry::{Shape, ShapeKind},
};

/// The driver-level type tag sent along with bound values.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DbType {
    Point,
    Line,
    LSeg,
    Box,
    Path,
    Polygon,
    Circle,
}

impl From<ShapeKind> for DbType {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Point => DbType::Point,
            ShapeKind::Line => DbType::Line,
            ShapeKind::LineSegment => DbType::LSeg,
            ShapeKind::Box => DbType::Box,
            ShapeKind::Path => DbType::Path,
            ShapeKind::Polygon => DbType::Polygon,
            ShapeKind::Circle => DbType::Circle,
        }
    }
}

/// Parameters that apply to a mapping regardless of its shape kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MappingParameters {
    /// Full store type name, when it differs from the kind's own name (a
    ///  domain over `point`, say).
    pub store_type: Option<String>,
    pub nullable: bool,
    pub size: Option<u32>,
}

impl Default for MappingParameters {
    fn default() -> Self {
        Self {
            store_type: None,
            nullable: true,
            size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMapping {
    kind: ShapeKind,
    parameters: MappingParameters,
}

impl LiteralMapping {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            parameters: MappingParameters::default(),
        }
    }

    /// Returns a mapping of the same kind carrying `parameters`. `self` is
    ///  left untouched.
    pub fn with_parameters(&self, parameters: MappingParameters) -> Self {
        tracing::trace!(kind = %self.kind, ?parameters, "cloning type mapping");
        Self {
            kind: self.kind,
            parameters,
        }
    }

    pub fn with_nullable(&self, nullable: bool) -> Self {
        self.with_parameters(MappingParameters {
            nullable,
            ..self.parameters.clone()
        })
    }

    pub fn with_size(&self, size: Option<u32>) -> Self {
        self.with_parameters(MappingParameters {
            size,
            ..self.parameters.clone()
        })
    }

    pub fn with_store_type(&self, store_type: impl Into<String>) -> Self {
        self.with_parameters(MappingParameters {
            store_type: Some(store_type.into()),
            ..self.parameters.clone()
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The store type name, e.g. `point` or `lseg`.
    pub fn store_type(&self) -> String {
        self.parameters
            .store_type
            .clone()
            .unwrap_or_else(|| self.kind.to_string())
    }

    pub fn db_type(&self) -> DbType {
        self.kind.into()
    }

    pub fn parameters(&self) -> &MappingParameters {
        &self.parameters
    }

    pub fn is_nullable(&self) -> bool {
        self.parameters.nullable
    }

    pub fn size(&self) -> Option<u32> {
        self.parameters.size
    }

    /// Renders `value` as a literal. The value must be of this mapping's kind;
    ///  anything else is [`Error::InvalidInput`].
    pub fn generate_non_null_literal(&self, value: &Shape) -> Result<String, Error> {
        if value.kind() != self.kind {
            return Err(Error::InvalidInput {
                expected: Some(self.kind),
                found: Some(value.kind()),
            });
        }
        Ok(value.to_literal())
    }

    /// Renders `value` as a literal, or `NULL` when there is no value.
    pub fn generate_sql_literal(&self, value: Option<&Shape>) -> Result<String, Error> {
        match value {
            Some(v) => self.generate_non_null_literal(v),
            None => Ok("NULL".to_string()),
        }
    }
}

static MAPPINGS: LazyLock<Vec<LiteralMapping>> =
    LazyLock::new(|| ShapeKind::iter().map(LiteralMapping::new).collect());

/// All default mappings, one per shape kind.
pub fn mappings() -> &'static [LiteralMapping] {
    &MAPPINGS
}

pub fn mapping_for(kind: ShapeKind) -> &'static LiteralMapping {
    // MAPPINGS is built from ShapeKind::iter() so the discriminant is the index
    &MAPPINGS[kind as usize]
}

/// Selects the default mapping for a runtime value.
pub fn find_mapping(value: &Shape) -> &'static LiteralMapping {
    mapping_for(value.kind())
}

pub fn find_mapping_by_store_type(store_type: &str) -> Option<&'static LiteralMapping> {
    store_type.parse::<ShapeKind>().ok().map(mapping_for)
}

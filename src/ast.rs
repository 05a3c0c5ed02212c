//! The expression tree handed to the translator: values, columns, parameters
//!  and method calls as the query was written in the host language. Translation
//!  replaces method calls with [`Expression::Function`] nodes naming a SQL
//!  function; a tree without any `Call` left can be printed as SQL.

use std::fmt;

use strum_macros::Display;

use crate::geometry::{Shape, ShapeKind};

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum HostType {
    Object,
    Bool,
    Char,
    Int32,
    Int64,
    Double,
    String,
    Point,
    Line,
    LineSegment,
    Box,
    Path,
    Polygon,
    Circle,
}

impl From<ShapeKind> for HostType {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Point => HostType::Point,
            ShapeKind::Line => HostType::Line,
            ShapeKind::LineSegment => HostType::LineSegment,
            ShapeKind::Box => HostType::Box,
            ShapeKind::Path => HostType::Path,
            ShapeKind::Polygon => HostType::Polygon,
            ShapeKind::Circle => HostType::Circle,
        }
    }
}

/// The identity of a method: two calls invoke the same method only if every
///  part of this matches, generic arguments included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct MethodId {
    pub declaring_type: HostType,
    pub name: String,
    pub parameter_types: Vec<HostType>,
    pub generic_arguments: Vec<HostType>,
}

impl MethodId {
    pub fn new(
        declaring_type: HostType,
        name: impl Into<String>,
        parameter_types: Vec<HostType>,
    ) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            parameter_types,
            generic_arguments: Vec::new(),
        }
    }

    pub fn with_generic_arguments(mut self, generic_arguments: Vec<HostType>) -> Self {
        self.generic_arguments = generic_arguments;
        self
    }
}

// String.Replace(String, String)
impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.name)?;
        if !self.generic_arguments.is_empty() {
            write!(f, "<{}>", join(&self.generic_arguments))?;
        }
        write!(f, "({})", join(&self.parameter_types))
    }
}

fn join(types: &[HostType]) -> String {
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    Text(String),
    Shape(Shape),
}

impl Value {
    pub fn host_type(&self) -> HostType {
        match self {
            Value::Null => HostType::Object,
            Value::Bool(_) => HostType::Bool,
            Value::Int(_) => HostType::Int64,
            Value::Double(_) => HostType::Double,
            Value::Text(_) => HostType::String,
            Value::Shape(s) => s.kind().into(),
        }
    }
}

// These From implementations keep test and caller code short
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}
impl From<Shape> for Value {
    fn from(v: Shape) -> Self {
        Value::Shape(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct MethodCall {
    pub method: MethodId,
    /// The receiver; `None` for static methods.
    pub object: Option<Box<Expression>>,
    pub arguments: Vec<Expression>,
    pub result_type: HostType,
}

impl MethodCall {
    pub fn instance(
        object: Expression,
        method: MethodId,
        arguments: Vec<Expression>,
        result_type: HostType,
    ) -> Self {
        Self {
            method,
            object: Some(Box::new(object)),
            arguments,
            result_type,
        }
    }

    pub fn static_call(method: MethodId, arguments: Vec<Expression>, result_type: HostType) -> Self {
        Self {
            method,
            object: None,
            arguments,
            result_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Expression {
    Constant(Value),
    Column {
        table: Option<String>,
        name: String,
        ty: HostType,
    },
    Parameter {
        name: String,
        ty: HostType,
    },
    Call(MethodCall),
    /// A call to a SQL function, e.g. `REPLACE(a, b, c)`.
    Function {
        name: String,
        args: Vec<Expression>,
        ty: HostType,
    },
}

impl Expression {
    pub fn host_type(&self) -> HostType {
        match self {
            Expression::Constant(v) => v.host_type(),
            Expression::Column { ty, .. } | Expression::Parameter { ty, .. } => *ty,
            Expression::Call(call) => call.result_type,
            Expression::Function { ty, .. } => *ty,
        }
    }

    pub fn column(table: Option<&str>, name: &str, ty: HostType) -> Self {
        Expression::Column {
            table: table.map(str::to_string),
            name: name.to_string(),
            ty,
        }
    }
}

impl From<Value> for Expression {
    fn from(v: Value) -> Self {
        Expression::Constant(v)
    }
}
impl From<bool> for Expression {
    fn from(v: bool) -> Self {
        Expression::Constant(v.into())
    }
}
impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Expression::Constant(s.into())
    }
}
impl From<i64> for Expression {
    fn from(v: i64) -> Self {
        Expression::Constant(v.into())
    }
}
impl From<f64> for Expression {
    fn from(v: f64) -> Self {
        Expression::Constant(v.into())
    }
}
impl From<Shape> for Expression {
    fn from(v: Shape) -> Self {
        Expression::Constant(v.into())
    }
}

//! PostgreSQL's built-in 2-D geometric types.
//!
//! These are plain values: nothing here checks that a box's corners are
//! ordered or that a circle's radius is non-negative. The server normalizes
//! or rejects such values itself.

use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An infinite line `a*x + b*y + c = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// A rectangle given by two opposite corners: (right, top) and (left, bottom).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct PgBox {
    pub right: f64,
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
}

impl PgBox {
    /// Arguments go top, right, bottom, left: clockwise from the top edge,
    ///  not in field order.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            right,
            top,
            left,
            bottom,
        }
    }

    /// Builds a box from its upper-right and lower-left corners.
    pub const fn from_corners(upper_right: Point, lower_left: Point) -> Self {
        Self {
            right: upper_right.x,
            top: upper_right.y,
            left: lower_left.x,
            bottom: lower_left.y,
        }
    }

    pub const fn upper_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub const fn lower_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Path {
    pub points: Vec<Point>,
    pub is_open: bool,
}

impl Path {
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            is_open: true,
        }
    }

    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            is_open: false,
        }
    }
}

/// A polygon is always closed: the last point connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// The shape kinds, named by their PostgreSQL store type.
#[derive(Display, EnumString, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    Point,
    Line,
    #[strum(serialize = "lseg")]
    #[cfg_attr(feature = "serde", serde(rename = "lseg"))]
    LineSegment,
    Box,
    Path,
    Polygon,
    Circle,
}

/// Any one of the geometric values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Shape {
    Point(Point),
    Line(Line),
    LineSegment(LineSegment),
    Box(PgBox),
    Path(Path),
    Polygon(Polygon),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::LineSegment(_) => ShapeKind::LineSegment,
            Shape::Box(_) => ShapeKind::Box,
            Shape::Path(_) => ShapeKind::Path,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }
}

// These From implementations let callers write `point.into()` wherever a
//  Shape is wanted
impl From<Point> for Shape {
    fn from(v: Point) -> Self {
        Shape::Point(v)
    }
}
impl From<Line> for Shape {
    fn from(v: Line) -> Self {
        Shape::Line(v)
    }
}
impl From<LineSegment> for Shape {
    fn from(v: LineSegment) -> Self {
        Shape::LineSegment(v)
    }
}
impl From<PgBox> for Shape {
    fn from(v: PgBox) -> Self {
        Shape::Box(v)
    }
}
impl From<Path> for Shape {
    fn from(v: Path) -> Self {
        Shape::Path(v)
    }
}
impl From<Polygon> for Shape {
    fn from(v: Polygon) -> Self {
        Shape::Polygon(v)
    }
}
impl From<Circle> for Shape {
    fn from(v: Circle) -> Self {
        Shape::Circle(v)
    }
}

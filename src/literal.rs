//! Renders geometric values as PostgreSQL literals, e.g. `POINT '(1,2)'`.
//!
//! Every number goes through [`format_f64`], so a literal parsed back by the
//! server yields the exact same `f64` values.

use std::fmt::Write;

use crate::{
    error::Error,
    geometry::{Circle, Line, LineSegment, Path, PgBox, Point, Polygon, Shape, ShapeKind},
};

/// Formats a float with the fewest digits that still parse back to the same
///  value. Never depends on locale: the decimal separator is always `.` and
///  there is no digit grouping.
///
/// Integral values drop the trailing `.0` (`1`, not `1.0`). Magnitudes that
///  Rust prints in scientific notation stay that way (`1e300`), which
///  `float8in` accepts. Non-finite values use the spellings PostgreSQL
///  understands.
pub fn format_f64(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let s = if v > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    // Debug formatting is the shortest round-trip representation
    let s = format!("{v:?}");
    match s.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => s,
    }
}

// (x,y)
fn write_point(out: &mut String, p: &Point) {
    // Writing to a String cannot fail
    let _ = write!(out, "({},{})", format_f64(p.x), format_f64(p.y));
}

// (x1,y1),(x2,y2),...
fn write_points(out: &mut String, points: &[Point]) {
    let mut is_first = true;
    for p in points {
        if is_first {
            is_first = false;
        } else {
            out.push(',');
        }
        write_point(out, p);
    }
}

/// `POINT '(x,y)'`
pub fn point_literal(p: &Point) -> String {
    let mut out = String::from("POINT '");
    write_point(&mut out, p);
    out.push('\'');
    out
}

/// `LINE '{a,b,c}'`
pub fn line_literal(l: &Line) -> String {
    format!(
        "LINE '{{{},{},{}}}'",
        format_f64(l.a),
        format_f64(l.b),
        format_f64(l.c)
    )
}

/// `LSEG '[(x1,y1),(x2,y2)]'`
pub fn lseg_literal(s: &LineSegment) -> String {
    let mut out = String::from("LSEG '[");
    write_points(&mut out, &[s.start, s.end]);
    out.push_str("]'");
    out
}

/// `BOX '((right,top),(left,bottom))'`
pub fn box_literal(b: &PgBox) -> String {
    let mut out = String::from("BOX '(");
    write_points(&mut out, &[b.upper_right(), b.lower_left()]);
    out.push_str(")'");
    out
}

/// `PATH '[...]'` for an open path, `PATH '(...)'` for a closed one. An empty
///  path still gets its brackets.
pub fn path_literal(p: &Path) -> String {
    let (open, close) = if p.is_open { ('[', ']') } else { ('(', ')') };
    let mut out = String::from("PATH '");
    out.push(open);
    write_points(&mut out, &p.points);
    out.push(close);
    out.push('\'');
    out
}

/// `POLYGON '(...)'`
pub fn polygon_literal(p: &Polygon) -> String {
    let mut out = String::from("POLYGON '(");
    write_points(&mut out, &p.points);
    out.push_str(")'");
    out
}

/// `CIRCLE '<(x,y),radius>'`
pub fn circle_literal(c: &Circle) -> String {
    let mut out = String::from("CIRCLE '<");
    write_point(&mut out, &c.center);
    let _ = write!(out, ",{}>'", format_f64(c.radius));
    out
}

impl Shape {
    /// Renders this value as a literal of its own store type.
    pub fn to_literal(&self) -> String {
        match self {
            Shape::Point(v) => point_literal(v),
            Shape::Line(v) => line_literal(v),
            Shape::LineSegment(v) => lseg_literal(v),
            Shape::Box(v) => box_literal(v),
            Shape::Path(v) => path_literal(v),
            Shape::Polygon(v) => polygon_literal(v),
            Shape::Circle(v) => circle_literal(v),
        }
    }
}

/// Renders a value that must be present. `None` is a caller bug and is
///  reported as [`Error::InvalidInput`].
pub fn generate_literal(value: Option<&Shape>) -> Result<String, Error> {
    value
        .map(Shape::to_literal)
        .ok_or(Error::InvalidInput {
            expected: None,
            found: None,
        })
}

/// Like [`generate_literal`] but for a caller that already knows which kind
///  it expects.
pub fn generate_literal_of(kind: ShapeKind, value: Option<&Shape>) -> Result<String, Error> {
    match value {
        Some(shape) if shape.kind() == kind => Ok(shape.to_literal()),
        Some(shape) => Err(Error::InvalidInput {
            expected: Some(kind),
            found: Some(shape.kind()),
        }),
        None => Err(Error::InvalidInput {
            expected: Some(kind),
            found: None,
        }),
    }
}

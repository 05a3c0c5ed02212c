//! End-to-end checks across the codec, the mappings and the translator.

use proptest::prelude::*;
use regex::Regex;
use strum::IntoEnumIterator;

use crate::{
    ast::{Expression, HostType, MethodCall},
    geometry::{Circle, Line, LineSegment, Path, PgBox, Point, Polygon, Shape, ShapeKind},
    literal::{format_f64, generate_literal},
    mapping::{find_mapping, mapping_for, mappings},
    translate::{CallRule, Translator},
};

fn numbers_in(literal: &str) -> Vec<f64> {
    let re = Regex::new(r"-?\d+(?:\.\d+)?(?:e-?\d+)?").unwrap();
    re.find_iter(literal)
        .map(|m| m.as_str().parse::<f64>().unwrap())
        .collect()
}

fn bits(v: &[f64]) -> Vec<u64> {
    v.iter().map(|f| f.to_bits()).collect()
}

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

fn point() -> impl Strategy<Value = Point> {
    (finite(), finite()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn point_coordinates_round_trip(x in finite(), y in finite()) {
        let lit = generate_literal(Some(&Point::new(x, y).into())).unwrap();
        prop_assert!(lit.starts_with("POINT '("));
        prop_assert_eq!(bits(&numbers_in(&lit)), bits(&[x, y]));
    }

    #[test]
    fn circle_round_trips(center in point(), radius in finite()) {
        let lit = Shape::from(Circle::new(center, radius)).to_literal();
        prop_assert_eq!(bits(&numbers_in(&lit)), bits(&[center.x, center.y, radius]));
    }

    #[test]
    fn path_round_trips(points in prop::collection::vec(point(), 0..8), is_open in any::<bool>()) {
        let lit = Shape::from(Path { points: points.clone(), is_open }).to_literal();
        let expected: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
        prop_assert_eq!(bits(&numbers_in(&lit)), bits(&expected));
        let (open, close) = if is_open { ("PATH '[", "]'") } else { ("PATH '(", ")'") };
        prop_assert!(lit.starts_with(open));
        prop_assert!(lit.ends_with(close));
    }

    #[test]
    fn format_is_shortest_round_trip(v in finite()) {
        let s = format_f64(v);
        prop_assert_eq!(s.parse::<f64>().unwrap().to_bits(), v.to_bits());
        prop_assert!(!s.contains(','));
    }
}

#[test]
fn every_kind_has_a_mapping_that_renders_it() {
    let samples: Vec<Shape> = vec![
        Point::new(1.0, 2.0).into(),
        Line::new(1.0, 2.0, 3.0).into(),
        LineSegment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)).into(),
        PgBox::from_corners(Point::new(3.0, 4.0), Point::new(1.0, 2.0)).into(),
        Path::open(vec![Point::new(1.0, 2.0)]).into(),
        Polygon::new(vec![Point::new(1.0, 2.0)]).into(),
        Circle::new(Point::new(1.0, 2.0), 3.0).into(),
    ];
    let kinds: Vec<ShapeKind> = samples.iter().map(Shape::kind).collect();
    assert_eq!(kinds, ShapeKind::iter().collect::<Vec<_>>());

    for shape in &samples {
        let mapping = find_mapping(shape);
        let lit = mapping.generate_non_null_literal(shape).unwrap();
        let keyword = mapping.store_type().to_uppercase();
        assert!(lit.starts_with(&format!("{keyword} '")), "{lit}");
        assert!(lit.ends_with('\''));
        // Every other mapping refuses it
        for other in mappings().iter().filter(|m| m.kind() != shape.kind()) {
            assert!(other.generate_non_null_literal(shape).is_err());
        }
    }
}

#[test]
fn shapes_inside_translated_queries() {
    // UPPER(REPLACE("t"."label", 'a', 'b')) next to a polygon literal
    let label = Expression::column(Some("t"), "label", HostType::String);
    let replace = Expression::Call(MethodCall::instance(
        label,
        CallRule::StringReplace.signature(),
        vec!["a".into(), "b".into()],
        HostType::String,
    ));
    let upper = Expression::Call(MethodCall::instance(
        replace,
        CallRule::StringToUpper.signature(),
        vec![],
        HostType::String,
    ));
    let polygon: Shape = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(0.5, 1.0),
        Point::new(1.0, 0.0),
    ])
    .into();
    let tree = Expression::Function {
        name: "CONCAT".into(),
        args: vec![upper, polygon.into()],
        ty: HostType::String,
    };
    assert_eq!(
        Translator::default().generate_sql(&tree).unwrap(),
        r#"CONCAT(UPPER(REPLACE("t"."label",'a','b')),POLYGON '((0,0),(0.5,1),(1,0))')"#
    );
}

#[test]
fn mappings_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let m = mapping_for(ShapeKind::Point);
                let shape: Shape = Point::new(i as f64, 0.5).into();
                (m as *const _ as usize, m.generate_non_null_literal(&shape).unwrap())
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0].0 == w[1].0));
    assert_eq!(results[3].1, "POINT '(3,0.5)'");
}

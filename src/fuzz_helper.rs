use crate::{ast, geometry::Shape, mapping::find_mapping, translate::Translator};

/// Renders `shape` through its mapping and checks the parts of the literal
///  that must hold for any input.
pub fn render_shape(shape: &Shape) {
    let mapping = find_mapping(shape);
    let literal = match mapping.generate_non_null_literal(shape) {
        Ok(literal) => literal,
        Err(e) => panic!("default mapping rejected its own kind: {e}"),
    };
    let prefix = format!("{} '", mapping.store_type().to_uppercase());
    assert!(literal.starts_with(&prefix), "{literal}");
    assert!(literal.ends_with('\''), "{literal}");
    // The only quotes are the two delimiters
    assert_eq!(literal.matches('\'').count(), 2, "{literal}");
}

pub fn translate_ast(expr: ast::Expression) {
    // Unsupported methods are expected; panics are not
    let _ = Translator::default().generate_sql(&expr);
}

#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use pg_expr::ast::Expression;

#[derive(Debug)]
pub struct AstInput {
    pub expr: Expression,
}

impl<'a> Arbitrary<'a> for AstInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(AstInput {
            expr: Expression::arbitrary(u)?,
        })
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Unstructured::new(data).arbitrary::<AstInput>() {
        pg_expr::fuzz_helper::translate_ast(input.expr);
    }
});

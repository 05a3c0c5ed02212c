use criterion::{Criterion, criterion_group, criterion_main};
use pg_expr::{
    ast::{Expression, HostType, MethodCall},
    translate::{CallRule, Translator},
};

// UPPER(TRIM(REPLACE(REPLACE(...))))
fn nested_calls(depth: usize) -> Expression {
    let mut expr = Expression::column(None, "name", HostType::String);
    for _ in 0..depth {
        expr = Expression::Call(MethodCall::instance(
            expr,
            CallRule::StringReplace.signature(),
            vec!["a".into(), "b".into()],
            HostType::String,
        ));
    }
    for rule in [CallRule::StringTrim, CallRule::StringToUpper] {
        expr = Expression::Call(MethodCall::instance(
            expr,
            rule.signature(),
            vec![],
            HostType::String,
        ));
    }
    expr
}

fn criterion_benchmark(c: &mut Criterion) {
    let translator = Translator::default();
    let expr = nested_calls(16);
    c.bench_function("translate nested string calls", |b| {
        b.iter(|| std::hint::black_box(translator.generate_sql(&expr)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

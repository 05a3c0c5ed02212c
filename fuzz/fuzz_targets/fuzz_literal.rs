#![no_main]
use libfuzzer_sys::fuzz_target;
use pg_expr::geometry::Shape;

fuzz_target!(|data: &[u8]| {
    if let Ok(shape) = arbitrary::Unstructured::new(data).arbitrary::<Shape>() {
        pg_expr::fuzz_helper::render_shape(&shape);
    }
});

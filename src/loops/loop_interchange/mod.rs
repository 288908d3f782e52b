//! # Loop Interchange
//!
//! Square matrix product with the classic `i, j, k` nest versus the
//! interchanged `i, k, j` nest, whose inner loop walks both operands along
//! rows.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "loop_interchange";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Matrix { dim: 128 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| match input.as_matrix() {
                Some((dim, cells)) => Output::Ints(func(dim, cells)),
                None => Output::Unit,
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "loops", SHAPE, ids)
            .with_description("Matrix square, ijk versus ikj loop order"),
    )
}

//! # Loop Fusion
//!
//! Sum and sum of squares of a sequence, computed in two passes versus one
//! fused pass.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "loop_fusion";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Sequence { len: 4096 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                let (sum, squares) = input.as_sequence().map_or((0, 0), func);
                Output::Pair(sum, squares)
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "loops", SHAPE, ids)
            .with_description("Two reductions in separate passes versus one fused pass"),
    )
}

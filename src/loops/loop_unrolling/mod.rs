//! # Loop Unrolling
//!
//! Fills a buffer with its own indices, one store per iteration versus four
//! stores per iteration with a remainder loop.
//!
//! The fill is idempotent, so every repetition sees the same state and the
//! case runs on a shared working copy.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "loop_unrolling";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Sequence { len: 4096 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                if let Some(values) = input.as_sequence_mut() {
                    func(values);
                }
                Output::Unit
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "loops", SHAPE, ids)
            .with_description("Index fill, rolled versus unrolled by four"),
    )
}

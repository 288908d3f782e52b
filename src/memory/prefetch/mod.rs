//! # Software Prefetching
//!
//! Touches every fourth element of a large sequence. The prefetch variant
//! asks for the cache line sixteen elements ahead before each update.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, InputMode, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "prefetch";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Sequence { len: 65_536 };

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
        BenchmarkCase::new(NAME, "memory", SHAPE, ids)
            .with_description("Strided update with and without software prefetch")
            .with_input_mode(InputMode::FreshPerRepetition),
    )
}

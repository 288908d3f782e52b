//! # SIMD Addition
//!
//! Adds the second half of a sequence into the first half, element-wise.
//! Scalar loop, fixed-width chunks the autovectorizer can pick up, and
//! explicit SSE2 intrinsics on x86_64.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, InputMode, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "simd_add";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Sequence { len: 4096 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                if let Some(values) = input.as_sequence_mut() {
                    let half = values.len() / 2;
                    let (dst, src) = values.split_at_mut(half);
                    func(dst, &src[..half]);
                }
                Output::Unit
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "memory", SHAPE, ids)
            .with_description("Element-wise add: scalar, chunked, SSE2")
            .with_input_mode(InputMode::FreshPerRepetition),
    )
}

//! # Memory Alignment
//!
//! Sums a byte buffer one byte at a time versus splitting it into an
//! unaligned head, a `u64`-aligned body summed a word at a time, and a tail.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "alignment";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Bytes { len: 65_536 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                Output::Count(input.as_bytes().map_or(0, func))
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "memory", SHAPE, ids)
            .with_description("Byte sum, bytewise versus aligned 64-bit words"),
    )
}

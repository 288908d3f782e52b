//! # Loop Fission
//!
//! One loop doing two unrelated jobs (hashing the sequence and rewriting it
//! in place) versus two loops each doing one. The rewrite mutates the input,
//! so every repetition starts from a fresh copy.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, InputMode, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "loop_fission";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Sequence { len: 4096 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                Output::Int(input.as_sequence_mut().map_or(0, func))
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "loops", SHAPE, ids)
            .with_description("Combined hash and rewrite loop versus two split loops")
            .with_input_mode(InputMode::FreshPerRepetition),
    )
}

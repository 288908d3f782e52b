//! # Loop-Carried Data Dependency
//!
//! The sequence is split into three equal arrays `a`, `b`, `c`. The carried
//! loop reads `b[i]` one iteration after writing it; the hoisted loop peels
//! the first statement so each iteration only touches its own index.
//!
//! Both loops mutate `a` and `b`, so every repetition starts from fresh data.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, InputMode, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "data_dependency";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Sequence { len: 3000 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                let Some(values) = input.as_sequence_mut() else {
                    return Output::Unit;
                };
                let n = values.len() / 3;
                let (a, rest) = values.split_at_mut(n);
                let (b, rest) = rest.split_at_mut(n);
                Output::Int(func(a, b, &rest[..n]) as i64)
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "loops", SHAPE, ids)
            .with_description("Loop-carried dependency versus peeled first iteration")
            .with_input_mode(InputMode::FreshPerRepetition),
    )
}

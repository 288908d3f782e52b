//! # Devirtualization
//!
//! A per-element operation called through a generic (monomorphized) path
//! versus through a `&dyn` trait object whose concrete type is hidden from
//! the optimizer.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "devirtualization";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Sequence { len: 4096 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                Output::Int(input.as_sequence().map_or(0, func))
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "control_flow", SHAPE, ids)
            .with_description("Static dispatch versus trait object dispatch"),
    )
}

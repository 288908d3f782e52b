//! # Cache-Friendly Access
//!
//! Increments every cell of a row-major matrix, walking rows (contiguous)
//! versus walking columns (one cache line touched per cell).

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, InputMode, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "cache_access";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Matrix { dim: 256 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                if let Some((dim, cells)) = input.as_matrix_mut() {
                    func(dim, cells);
                }
                Output::Unit
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "memory", SHAPE, ids)
            .with_description("Matrix increment in row-major versus column-major order")
            .with_input_mode(InputMode::FreshPerRepetition),
    )
}

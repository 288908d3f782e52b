//! # Branch Layout Hints
//!
//! Marks one side of a branch as cold so the compiler lays the other side
//! out as the fall-through path.
//!
//! ## Key Concepts
//!
//! - **Likely**: the `Yes` path falls through, the `No` path is moved out of line
//! - **Unlikely**: the reverse, which penalises the common `Yes` path
//! - Stable Rust has no `likely()` intrinsic; calling a `#[cold]` function on
//!   a path gives the same layout hint
//!
//! Input is mostly `Yes` (see `GeneratorConfig::yes_probability`), so the
//! "likely" layout matches the data and "unlikely" fights it. Every `Yes`
//! bumps the run accumulator, standing in for a global hit counter.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "branch_hints";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Tagged { len: 100_000 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, acc| {
                // Shape is checked by the engine before any invocation
                Output::Count(input.as_tagged().map_or(0, |tags| func(tags, acc)))
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "control_flow", SHAPE, ids)
            .with_description("Cold-path hints on a mostly-Yes tag stream"),
    )
}

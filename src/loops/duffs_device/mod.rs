//! # Duff's Device
//!
//! Byte copy written as a plain loop, as a block-unrolled copy that handles
//! the ragged head first (the shape of Duff's device), and as the standard
//! library's `copy_from_slice`.
//!
//! The input buffer is split in half: every variant copies the first half
//! over the second, so nothing is allocated inside the timed call.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::{BenchmarkCase, VariantRegistry};
use crate::variant::{Output, Variant};

pub const NAME: &str = "duffs_device";
pub const SHAPE: ShapeDescriptor = ShapeDescriptor::Bytes { len: 8192 };

pub fn register(registry: &mut VariantRegistry) -> Result<()> {
    let mut ids = Vec::new();
    for info in code::available_variants() {
        let id = format!("{NAME}/{}", info.name);
        let func = info.function;
        registry.register_variant(
            Variant::new(&id, SHAPE, move |input, _acc| {
                if let Some(buf) = input.as_bytes_mut() {
                    let half = buf.len() / 2;
                    let (src, dst) = buf.split_at_mut(half);
                    func(&mut dst[..half], src);
                }
                Output::Unit
            })
            .with_description(info.description),
        )?;
        ids.push(id);
    }
    registry.add_case(
        BenchmarkCase::new(NAME, "loops", SHAPE, ids)
            .with_description("Byte copy: plain loop, Duff-style blocks, copy_from_slice"),
    )
}

//! Implementation variants for the block copy

mod block;
mod original;

pub use block::copy_blocks;
pub use original::{copy_byte_loop, copy_std};

use crate::variant::VariantInfo;

/// Copies `src` into `dst`; both have the same length
pub type CopyFn = fn(&mut [u8], &[u8]);

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<CopyFn>> {
    vec![
        VariantInfo {
            name: "byte_loop",
            description: "One byte per iteration through an opaque loop",
            function: copy_byte_loop,
        },
        VariantInfo {
            name: "duffs_device",
            description: "Ragged head then unrolled blocks of eight",
            function: copy_blocks::<8>,
        },
        VariantInfo {
            name: "copy_from_slice",
            description: "Standard library memcpy",
            function: copy_std,
        },
    ]
}

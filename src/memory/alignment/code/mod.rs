//! Implementation variants for aligned access

mod aligned;
mod original;

pub use aligned::sum_aligned_words;
pub use original::sum_bytewise;

use crate::variant::VariantInfo;

pub type ByteSumFn = fn(&[u8]) -> u64;

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<ByteSumFn>> {
    vec![
        VariantInfo {
            name: "bytewise",
            description: "One byte load per iteration",
            function: sum_bytewise,
        },
        VariantInfo {
            name: "aligned_words",
            description: "align_to::<u64> body summed as packed words",
            function: sum_aligned_words,
        },
    ]
}

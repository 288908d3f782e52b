//! Implementation variants for loop fission

mod combined;
mod split;

pub use combined::hash_and_rewrite_combined;
pub use split::hash_and_rewrite_split;

use crate::variant::VariantInfo;

/// Hashes the original values, then rewrites each as `v * 3 ^ 5`
pub type FissionFn = fn(&mut [i32]) -> i64;

#[inline(always)]
pub(crate) fn mix(hash: i64, v: i32) -> i64 {
    hash.wrapping_mul(31).wrapping_add(v as i64)
}

#[inline(always)]
pub(crate) fn rewrite(v: i32) -> i32 {
    v.wrapping_mul(3) ^ 5
}

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<FissionFn>> {
    vec![
        VariantInfo {
            name: "combined",
            description: "Hash and rewrite in one loop body",
            function: hash_and_rewrite_combined,
        },
        VariantInfo {
            name: "split",
            description: "Hash loop followed by a separate rewrite loop",
            function: hash_and_rewrite_split,
        },
    ]
}

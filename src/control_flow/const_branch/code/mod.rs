//! Implementation variants for the compile-time branch comparison

pub mod original;
pub mod const_generic;

pub use const_generic::transform_sum_const;
pub use original::transform_sum_runtime;

use crate::variant::VariantInfo;

pub type TransformFn = fn(&[i32]) -> i64;

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<TransformFn>> {
    vec![
        VariantInfo {
            name: "runtime_flag",
            description: "Mode read from an opaque flag, tested every element",
            function: transform_sum_runtime,
        },
        VariantInfo {
            name: "const_generic",
            description: "Mode fixed by a const generic, dead arm removed",
            function: transform_sum_const::<false>,
        },
    ]
}

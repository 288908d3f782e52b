//! Implementation variants for the data dependency case

mod carried;
mod hoisted;

pub use carried::dependency_carried;
pub use hoisted::dependency_hoisted;

use crate::variant::VariantInfo;

/// Updates `a` and `b` in place and returns the last element of `b`.
/// All three slices have the same length.
pub type DependencyFn = fn(&mut [i32], &mut [i32], &[i32]) -> i32;

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<DependencyFn>> {
    vec![
        VariantInfo {
            name: "carried",
            description: "b[i+1] written one iteration before it is read",
            function: dependency_carried,
        },
        VariantInfo {
            name: "hoisted",
            description: "First statement peeled, no cross-iteration read",
            function: dependency_hoisted,
        },
    ]
}

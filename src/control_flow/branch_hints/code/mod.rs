//! Implementation variants for the branch hint comparison

pub mod c_impl;
pub mod likely;
pub mod unlikely;

pub use likely::{branch_likely, count_likely};
pub use unlikely::{branch_unlikely, count_unlikely};

use crate::input::YesNo;
use crate::variant::{Accumulator, VariantInfo};

/// Counts `Yes` tags, bumping the accumulator once per hit
pub type CountFn = fn(&[YesNo], &mut Accumulator) -> u64;

/// Never inlined, never does anything; calling it marks the enclosing path cold.
#[cold]
#[inline(never)]
pub(crate) fn cold_path() {}

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<CountFn>> {
    let mut variants: Vec<VariantInfo<CountFn>> = vec![
        VariantInfo {
            name: "likely",
            description: "Yes path falls through, No path marked cold",
            function: count_likely,
        },
        VariantInfo {
            name: "unlikely",
            description: "Yes path marked cold, No path falls through",
            function: count_unlikely,
        },
    ];

    if c_impl::C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-builtin-expect",
            description: "C loop with __builtin_expect on the Yes test",
            function: c_impl::count_builtin_expect,
        });
    }

    variants
}

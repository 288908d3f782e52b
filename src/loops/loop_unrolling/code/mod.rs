//! Implementation variants for loop unrolling

mod original;
mod unrolled;

pub use original::fill_rolled;
pub use unrolled::fill_unrolled_x4;

use crate::variant::VariantInfo;

pub type FillFn = fn(&mut [i32]);

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<FillFn>> {
    vec![
        VariantInfo {
            name: "rolled",
            description: "One store per iteration",
            function: fill_rolled,
        },
        VariantInfo {
            name: "unrolled_x4",
            description: "Four stores per iteration plus remainder loop",
            function: fill_unrolled_x4,
        },
    ]
}

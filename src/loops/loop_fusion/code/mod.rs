//! Implementation variants for loop fusion

mod fused;
mod separate;

pub use fused::moments_fused;
pub use separate::moments_separate;

use crate::variant::VariantInfo;

/// Returns `(sum, sum of squares)`
pub type MomentsFn = fn(&[i32]) -> (i64, i64);

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<MomentsFn>> {
    vec![
        VariantInfo {
            name: "separate",
            description: "One loop per reduction, data read twice",
            function: moments_separate,
        },
        VariantInfo {
            name: "fused",
            description: "Both reductions in a single loop",
            function: moments_fused,
        },
    ]
}

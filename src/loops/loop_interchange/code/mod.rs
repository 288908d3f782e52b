//! Implementation variants for loop interchange

mod ijk;
mod ikj;

pub use ijk::square_ijk;
pub use ikj::square_ikj;

use crate::variant::VariantInfo;

/// Computes `m * m` for a row-major `dim x dim` matrix
pub type SquareFn = fn(usize, &[i32]) -> Vec<i32>;

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<SquareFn>> {
    vec![
        VariantInfo {
            name: "ijk",
            description: "Inner loop strides down a column of the right operand",
            function: square_ijk,
        },
        VariantInfo {
            name: "ikj",
            description: "Interchanged, inner loop walks rows contiguously",
            function: square_ikj,
        },
    ]
}

//! Implementation variants for the traversal order comparison

mod column_major;
mod row_major;

pub use column_major::increment_column_major;
pub use row_major::increment_row_major;

use crate::variant::VariantInfo;

/// Adds one to every cell of a row-major `dim x dim` matrix
pub type IncrementFn = fn(usize, &mut [i32]);

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<IncrementFn>> {
    vec![
        VariantInfo {
            name: "row_major",
            description: "Inner loop walks a row, stride 1",
            function: increment_row_major,
        },
        VariantInfo {
            name: "column_major",
            description: "Inner loop walks a column, stride dim",
            function: increment_column_major,
        },
    ]
}

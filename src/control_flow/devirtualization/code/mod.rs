//! Implementation variants for devirtualization

pub mod dyn_call;
pub mod static_call;

pub use dyn_call::sum_dyn;
pub use static_call::sum_static;

use crate::variant::VariantInfo;

pub type SumFn = fn(&[i32]) -> i64;

/// Per-element operation shared by both dispatch styles
pub trait Compute {
    fn compute(&self, x: i64) -> i64;
}

/// Multiplies by three
pub struct Tripler;

impl Compute for Tripler {
    #[inline]
    fn compute(&self, x: i64) -> i64 {
        x.wrapping_mul(3)
    }
}

pub static TRIPLER: Tripler = Tripler;

/// Returns all available variants
pub fn available_variants() -> Vec<VariantInfo<SumFn>> {
    vec![
        VariantInfo {
            name: "static_call",
            description: "Generic over the concrete type, call inlined",
            function: sum_static,
        },
        VariantInfo {
            name: "dyn_call",
            description: "Call through an opaque &dyn Compute vtable",
            function: sum_dyn,
        },
    ]
}

//! Runtime flag version.
//!
//! The flag is re-read through `black_box` on every element, so the compiler
//! cannot hoist the branch out of the loop.

use std::hint::black_box;

/// Sum of `v * 3 + 1` over the slice (or `-v` in negate mode).
#[inline(never)]
pub fn transform_sum_runtime(values: &[i32]) -> i64 {
    let negate = false;
    let mut sum = 0i64;
    for &v in values {
        let t = if *black_box(&negate) {
            -(v as i64)
        } else {
            v as i64 * 3 + 1
        };
        sum = sum.wrapping_add(t);
    }
    sum
}

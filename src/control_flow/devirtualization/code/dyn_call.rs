//! Dynamic dispatch version.
//!
//! The trait object goes through `black_box` so the compiler cannot prove
//! which `compute` the vtable points at.

use std::hint::black_box;

use super::{Compute, TRIPLER};

#[inline(never)]
fn call_dyn(op: &dyn Compute, x: i64) -> i64 {
    op.compute(x)
}

pub fn sum_dyn(values: &[i32]) -> i64 {
    let op: &dyn Compute = black_box(&TRIPLER as &dyn Compute);
    let mut sum = 0i64;
    for &v in values {
        sum = sum.wrapping_add(call_dyn(op, v as i64));
    }
    sum
}

use super::{Compute, TRIPLER};

#[inline(never)]
fn sum_with<C: Compute>(op: &C, values: &[i32]) -> i64 {
    values
        .iter()
        .fold(0i64, |sum, &v| sum.wrapping_add(op.compute(v as i64)))
}

pub fn sum_static(values: &[i32]) -> i64 {
    sum_with(&TRIPLER, values)
}

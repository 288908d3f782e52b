//! Const generic version: `NEGATE` is a compile-time constant per instantiation.

#[inline(never)]
pub fn transform_sum_const<const NEGATE: bool>(values: &[i32]) -> i64 {
    let mut sum = 0i64;
    for &v in values {
        let t = if NEGATE {
            -(v as i64)
        } else {
            v as i64 * 3 + 1
        };
        sum = sum.wrapping_add(t);
    }
    sum
}

#[inline(never)]
pub fn moments_fused(values: &[i32]) -> (i64, i64) {
    let mut sum = 0i64;
    let mut squares = 0i64;
    for &v in values {
        sum = sum.wrapping_add(v as i64);
        squares = squares.wrapping_add(v as i64 * v as i64);
    }
    (sum, squares)
}

use std::hint::black_box;

#[inline(never)]
pub fn moments_separate(values: &[i32]) -> (i64, i64) {
    let mut sum = 0i64;
    for &v in values {
        sum = sum.wrapping_add(v as i64);
    }
    // Keeps the two passes from being merged by the optimizer
    let values = black_box(values);
    let mut squares = 0i64;
    for &v in values {
        squares = squares.wrapping_add(v as i64 * v as i64);
    }
    (sum, squares)
}

//! Peeled version of [`super::dependency_carried`].
//!
//! `a[0]` is updated before the loop and the last `b` update after it, so the
//! loop body pairs `b[i + 1]` with `a[i + 1]` and computes the same values.

#[inline(never)]
pub fn dependency_hoisted(a: &mut [i32], b: &mut [i32], c: &[i32]) -> i32 {
    let n = a.len();
    if n < 2 {
        return b.last().copied().unwrap_or(0);
    }

    a[0] = a[0].wrapping_add(b[0]);
    for i in 0..n - 2 {
        b[i + 1] = b[i + 1].wrapping_add(c[i]);
        a[i + 1] = a[i + 1].wrapping_add(b[i + 1]);
    }
    b[n - 1] = b[n - 1].wrapping_add(c[n - 2]);
    b[n - 1]
}

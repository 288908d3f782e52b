#[inline(never)]
pub fn dependency_carried(a: &mut [i32], b: &mut [i32], c: &[i32]) -> i32 {
    let n = a.len();
    if n == 0 {
        return 0;
    }
    for i in 0..n - 1 {
        a[i] = a[i].wrapping_add(b[i]);
        b[i + 1] = b[i + 1].wrapping_add(c[i]);
    }
    b[n - 1]
}

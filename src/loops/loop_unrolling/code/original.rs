/// Writes `a[i] = i` for every index.
#[inline(never)]
pub fn fill_rolled(values: &mut [i32]) {
    for (i, v) in values.iter_mut().enumerate() {
        *v = i as i32;
    }
}

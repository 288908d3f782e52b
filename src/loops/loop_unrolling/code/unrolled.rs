//! Manually unrolled fill.

/// Same result as [`super::fill_rolled`], four indices per iteration.
#[inline(never)]
pub fn fill_unrolled_x4(values: &mut [i32]) {
    let len = values.len();
    let chunks = len / 4;

    for c in 0..chunks {
        let i = c * 4;
        values[i] = i as i32;
        values[i + 1] = (i + 1) as i32;
        values[i + 2] = (i + 2) as i32;
        values[i + 3] = (i + 3) as i32;
    }

    // Remainder
    for i in chunks * 4..len {
        values[i] = i as i32;
    }
}

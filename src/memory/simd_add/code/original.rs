use std::hint::black_box;

/// Scalar reference. `black_box` per element keeps the loop scalar.
#[inline(never)]
pub fn add_scalar(dst: &mut [i32], src: &[i32]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = black_box(d.wrapping_add(s));
    }
}

//! Interchanged nest.
//!
//! Wrapping arithmetic keeps the sum order irrelevant, so the result matches
//! the `ijk` nest bit for bit.

#[inline(never)]
pub fn square_ikj(dim: usize, m: &[i32]) -> Vec<i32> {
    let mut out = vec![0i32; dim * dim];
    for i in 0..dim {
        for k in 0..dim {
            let a = m[i * dim + k];
            let row = &m[k * dim..(k + 1) * dim];
            let dst = &mut out[i * dim..(i + 1) * dim];
            for (o, &b) in dst.iter_mut().zip(row) {
                *o = o.wrapping_add(a.wrapping_mul(b));
            }
        }
    }
    out
}

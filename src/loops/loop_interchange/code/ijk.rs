#[inline(never)]
pub fn square_ijk(dim: usize, m: &[i32]) -> Vec<i32> {
    let mut out = vec![0i32; dim * dim];
    for i in 0..dim {
        for j in 0..dim {
            let mut acc = 0i32;
            for k in 0..dim {
                acc = acc.wrapping_add(m[i * dim + k].wrapping_mul(m[k * dim + j]));
            }
            out[i * dim + j] = acc;
        }
    }
    out
}

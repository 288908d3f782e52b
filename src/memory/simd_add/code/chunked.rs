const LANES: usize = 8;

#[inline(never)]
pub fn add_chunked(dst: &mut [i32], src: &[i32]) {
    let len = dst.len().min(src.len());
    let (dst, src) = (&mut dst[..len], &src[..len]);

    let mut d_chunks = dst.chunks_exact_mut(LANES);
    let mut s_chunks = src.chunks_exact(LANES);
    for (d, s) in (&mut d_chunks).zip(&mut s_chunks) {
        for j in 0..LANES {
            d[j] = d[j].wrapping_add(s[j]);
        }
    }

    // Remainder
    for (d, &s) in d_chunks
        .into_remainder()
        .iter_mut()
        .zip(s_chunks.remainder())
    {
        *d = d.wrapping_add(s);
    }
}

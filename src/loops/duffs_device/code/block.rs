//! Duff's device without the fall-through `switch`.
//!
//! The original trick jumps into the middle of an unrolled loop to handle
//! `len % K` bytes first. Here the head is copied up front and the rest goes
//! through fixed `K`-byte blocks, which the compiler fully unrolls.

#[inline(never)]
pub fn copy_blocks<const K: usize>(dst: &mut [u8], src: &[u8]) {
    let len = src.len().min(dst.len());
    let head = len % K;

    for i in 0..head {
        dst[i] = src[i];
    }

    let dst_blocks = dst[head..len].chunks_exact_mut(K);
    let src_blocks = src[head..len].chunks_exact(K);
    for (d, s) in dst_blocks.zip(src_blocks) {
        for j in 0..K {
            d[j] = s[j];
        }
    }
}

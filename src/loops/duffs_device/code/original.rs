use std::hint::black_box;

/// Plain byte loop. `black_box` on each byte stops it being turned into memcpy.
#[inline(never)]
pub fn copy_byte_loop(dst: &mut [u8], src: &[u8]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = black_box(s);
    }
}

#[inline(never)]
pub fn copy_std(dst: &mut [u8], src: &[u8]) {
    dst.copy_from_slice(src);
}

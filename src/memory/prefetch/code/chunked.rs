//! Portable line-at-a-time walk: sixteen `i32` make one 64-byte line.

use super::STRIDE;

const LINE: usize = 16;

#[inline(never)]
pub fn touch_chunked_lines(values: &mut [i32]) {
    let mut lines = values.chunks_exact_mut(LINE);
    for line in &mut lines {
        for j in (0..LINE).step_by(STRIDE) {
            line[j] = line[j].wrapping_add(1);
        }
    }
    // LINE is a multiple of STRIDE, so the tail starts on a stride boundary
    for v in lines.into_remainder().iter_mut().step_by(STRIDE) {
        *v = v.wrapping_add(1);
    }
}

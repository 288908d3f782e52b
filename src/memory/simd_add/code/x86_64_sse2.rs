//! x86_64 SSE2 SIMD implementation.
//!
//! SSE2 is available on all x86_64 CPUs, processing 4 i32 values per iteration.

use std::arch::x86_64::*;

/// Adds four lanes at a time with `_mm_add_epi32`, which wraps on overflow.
pub fn add_x86_64_sse2(dst: &mut [i32], src: &[i32]) {
    let len = dst.len().min(src.len());
    let chunks = len / 4;

    // SAFETY: every load and store covers indices below `chunks * 4 <= len`,
    // and unaligned loads are used throughout.
    unsafe {
        for i in 0..chunks {
            let idx = i * 4;
            let a = _mm_loadu_si128(dst.as_ptr().add(idx) as *const __m128i);
            let b = _mm_loadu_si128(src.as_ptr().add(idx) as *const __m128i);
            _mm_storeu_si128(
                dst.as_mut_ptr().add(idx) as *mut __m128i,
                _mm_add_epi32(a, b),
            );
        }
    }

    // Handle remainder
    for i in chunks * 4..len {
        dst[i] = dst[i].wrapping_add(src[i]);
    }
}

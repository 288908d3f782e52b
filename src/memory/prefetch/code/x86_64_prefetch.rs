//! x86_64 software prefetch.

use std::arch::x86_64::{_mm_prefetch, _MM_HINT_T0};

use super::{DISTANCE, STRIDE};

pub fn touch_x86_64_prefetch(values: &mut [i32]) {
    let len = values.len();
    let mut i = 0;
    while i < len {
        if i + DISTANCE < len {
            // SAFETY: the address is in bounds; prefetch never faults anyway.
            unsafe {
                _mm_prefetch(values.as_ptr().add(i + DISTANCE) as *const i8, _MM_HINT_T0);
            }
        }
        values[i] = values[i].wrapping_add(1);
        i += STRIDE;
    }
}

//! FFI bindings for the C branch hint variant.

use crate::input::YesNo;
use crate::variant::Accumulator;

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn count_yes_builtin_expect(tags: *const u8, len: usize) -> u64;
    }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

/// C loop using `__builtin_expect`; folds the whole count into the accumulator at once
#[cfg(c_implementation_active)]
pub fn count_builtin_expect(tags: &[YesNo], acc: &mut Accumulator) -> u64 {
    // SAFETY: YesNo is repr(u8), so the slice is `len` readable bytes
    let count = unsafe { ffi::count_yes_builtin_expect(tags.as_ptr().cast::<u8>(), tags.len()) };
    acc.add(count);
    count
}

// Stub for missing C compiler; never registered because C_IMPL_AVAILABLE is false
#[cfg(not(c_implementation_active))]
pub fn count_builtin_expect(_tags: &[YesNo], _acc: &mut Accumulator) -> u64 {
    unreachable!("C implementation not compiled (requires GCC, MSVC or Apple Clang)")
}

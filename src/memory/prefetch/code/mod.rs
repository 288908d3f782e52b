//! Prefetch implementations.

mod chunked;
mod original;
#[cfg(target_arch = "x86_64")]
mod x86_64_prefetch;

pub use chunked::touch_chunked_lines;
pub use original::touch_plain;
#[cfg(target_arch = "x86_64")]
pub use x86_64_prefetch::touch_x86_64_prefetch;

use crate::variant::VariantInfo;

/// Elements between two updates
pub const STRIDE: usize = 4;
/// Elements ahead of the current update that get prefetched
pub const DISTANCE: usize = 16;

/// Adds one (wrapping) to every `STRIDE`-th element
pub type TouchFn = fn(&mut [i32]);

/// Get all available variants for the current CPU
pub fn available_variants() -> Vec<VariantInfo<TouchFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<TouchFn>> = vec![
        VariantInfo {
            name: "plain",
            description: "Strided loop, hardware prefetcher only",
            function: touch_plain,
        },
        VariantInfo {
            name: "chunked_lines",
            description: "Walks 64-byte lines, updates each line's strided slots",
            function: touch_chunked_lines,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    {
        variants.push(VariantInfo {
            name: "x86_64-prefetch",
            description: "x86_64 _mm_prefetch(T0) sixteen elements ahead",
            function: touch_x86_64_prefetch,
        });
    }

    variants
}

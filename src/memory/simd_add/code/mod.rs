//! SIMD addition implementations.

mod chunked;
mod original;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

pub use chunked::add_chunked;
pub use original::add_scalar;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::add_x86_64_sse2;

use crate::variant::VariantInfo;

/// `dst[i] += src[i]` (wrapping) over equal-length slices
pub type AddFn = fn(&mut [i32], &[i32]);

/// Get all available variants for the current CPU
pub fn available_variants() -> Vec<VariantInfo<AddFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<AddFn>> = vec![
        VariantInfo {
            name: "scalar",
            description: "One element per iteration, vectorization blocked",
            function: add_scalar,
        },
        VariantInfo {
            name: "chunked",
            description: "Fixed 8-wide chunks, left to the autovectorizer",
            function: add_chunked,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    {
        variants.push(VariantInfo {
            name: "x86_64-sse2",
            description: "x86_64 with SSE2 _mm_add_epi32",
            function: add_x86_64_sse2,
        });
    }

    variants
}

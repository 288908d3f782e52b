//! Memory techniques: SIMD, cache-friendly traversal, software prefetching
//! and aligned access.

pub mod alignment;
pub mod cache_access;
pub mod prefetch;
pub mod simd_add;

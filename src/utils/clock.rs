//! Measurement clock.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters
//! for precise micro-benchmarking. Use `--features use_time` or
//! `--no-default-features` to use wall-clock time instead.
//!
//! Either way a measurement comes out as a plain `u64` in [`unit_name`] units.

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================
//
// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled
// Use wall-clock time if: use_time is enabled OR cpu_cycles is disabled

/// Opaque start stamp returned by [`now`]
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Stamp = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Stamp = std::time::Instant;

/// Read current stamp (cycles or time)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Stamp {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Stamp {
    std::time::Instant::now()
}

/// Units elapsed since `start`
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Stamp) -> u64 {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Stamp) -> u64 {
    start.elapsed().as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    crate::utils::cycles::COUNTER_UNIT
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    #[test]
    fn test_elapsed_counts_work() {
        let start = now();
        let mut sum = 0u64;
        for i in 0..100_000u64 {
            sum = black_box(sum.wrapping_add(black_box(i)));
        }
        let taken = elapsed(start);
        assert!(sum > 0);
        // Low-resolution counters may legitimately report zero, never wrap
        assert!(taken < u64::MAX / 2);
    }
}

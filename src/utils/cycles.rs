//! CPU cycle counter.
//!
//! x86/x86_64 read the TSC fenced by LFENCE, aarch64 reads CNTVCT_EL0.
//! Other targets fall back to a monotonic nanosecond clock so the
//! `cpu_cycles` feature never breaks the build.

/// Unit reported for counter readings on this target
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub const COUNTER_UNIT: &str = "cycles";

#[cfg(target_arch = "aarch64")]
pub const COUNTER_UNIT: &str = "ticks";

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
pub const COUNTER_UNIT: &str = "ns";

/// Read the current CPU cycle counter / timer.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        use core::arch::x86_64::{_mm_lfence, _rdtsc};
        // SAFETY: LFENCE and RDTSC are available on every x86_64 CPU
        unsafe {
            // LFENCE keeps speculative execution from leaking across the read
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "x86")]
    {
        use core::arch::x86::{_mm_lfence, _rdtsc};
        // SAFETY: requires SSE2 for LFENCE, as does every x86 Rust target with std
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // CNTVCT_EL0 is a fixed-frequency virtual timer readable from userspace
        let val: u64;
        // SAFETY: reading CNTVCT_EL0 has no side effects
        unsafe {
            core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
        }
        val
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        fallback_nanos()
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
fn fallback_nanos() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

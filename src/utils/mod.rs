//! Utility modules for measurement and execution.

pub mod clock;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export commonly used items
pub use clock::{elapsed, now, unit_name};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{all_succeeded, run_cases, select_cases, CaseRun, RunEvent, ALL_CASES};
pub use timer::{
    CancelToken, PinStrategy, RoundOrder, RunOutcome, Sample, TimingConfig, TimingEngine,
    VariantSamples,
};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

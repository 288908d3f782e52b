//! # Micro-Variant-Bench
//!
//! A harness for comparing alternative implementations of the same
//! micro-optimization technique. Each case registers two or more variants
//! that consume the same input shape; the timing engine checks they agree,
//! interleaves them in round-robin rounds and reports per-variant statistics
//! relative to the first (baseline) variant.

pub mod control_flow;
pub mod error;
pub mod input;
pub mod loops;
pub mod memory;
pub mod registry;
pub mod report;
pub mod utils;
pub mod variant;

/// Re-export tui from utils for the CLI
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{BenchError, Result};
    pub use crate::input::{GeneratorConfig, InputData, InputGenerator, InputSet, ShapeDescriptor};
    pub use crate::registry::{build_registry, BenchmarkCase, InputMode, VariantRegistry};
    pub use crate::report::{compare, summarize, CaseReport, Report};
    pub use crate::utils::{
        CancelToken, PinStrategy, RoundOrder, RunOutcome, Sample, TimingConfig, TimingEngine,
    };
    pub use crate::variant::{Accumulator, Output, Variant};
}

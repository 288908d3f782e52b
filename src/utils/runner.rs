//! Case selection and the multi-case run loop.
//!
//! A failing case is logged and recorded; the remaining cases still run.

use log::error;

use crate::error::Result;
use crate::input::InputGenerator;
use crate::registry::{BenchmarkCase, VariantRegistry};
use crate::report::CaseReport;
use crate::utils::timer::{CancelToken, TimingEngine};

/// Name that selects every case.
pub const ALL_CASES: &str = "all";

/// Cases to run for a CLI selection.
///
/// [`ALL_CASES`] selects every registered case, narrowed to `category` when
/// one is given. Any other name must be a registered case.
pub fn select_cases<'r>(
    registry: &'r VariantRegistry,
    name: &str,
    category: Option<&str>,
) -> Result<Vec<&'r BenchmarkCase>> {
    if name == ALL_CASES {
        return Ok(registry
            .cases()
            .iter()
            .filter(|c| category.map_or(true, |cat| c.category() == cat))
            .collect());
    }
    Ok(vec![registry.case(name)?])
}

/// Result of one case.
#[derive(Debug)]
pub struct CaseRun {
    pub case: String,
    pub result: Result<CaseReport>,
}

impl CaseRun {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Progress notifications from [`run_cases`].
pub enum RunEvent<'a> {
    Starting(&'a BenchmarkCase),
    Finished(&'a CaseRun),
}

/// Generate input for and time every case in order.
pub fn run_cases<F>(
    engine: &TimingEngine<'_>,
    generator: &InputGenerator,
    cases: &[&BenchmarkCase],
    seed: u64,
    cancel: &CancelToken,
    mut on_event: F,
) -> Vec<CaseRun>
where
    F: FnMut(RunEvent<'_>),
{
    let anomaly_factor = engine.config().anomaly_factor;
    let mut runs = Vec::with_capacity(cases.len());
    for &case in cases {
        on_event(RunEvent::Starting(case));
        let result = generator
            .generate(case.shape(), seed)
            .and_then(|input| engine.run(case, &input, cancel))
            .map(|outcome| CaseReport::from_outcome(&outcome, anomaly_factor));
        if let Err(e) = &result {
            error!("case '{}' failed: {}", case.name(), e);
        }
        let run = CaseRun {
            case: case.name().to_string(),
            result,
        };
        on_event(RunEvent::Finished(&run));
        runs.push(run);
    }
    runs
}

/// True when every case produced a report. Drives the process exit code.
pub fn all_succeeded(runs: &[CaseRun]) -> bool {
    runs.iter().all(CaseRun::is_ok)
}

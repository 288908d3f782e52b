//! Timing engine.
//!
//! One run of one case:
//! 1. Resolves the case's variants and checks their shapes against the input
//! 2. Runs every variant once and checks it agrees with the baseline
//! 3. Warms up every variant
//! 4. Times `repetitions` rounds, each round visiting every variant once
//!
//! Everything runs on the calling thread. Variants of a case are never run
//! concurrently: they would share caches and execution ports and the timings
//! would no longer be attributable.

use std::hint::black_box;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::clock::{elapsed, now, unit_name};
use super::cpu_affinity::CpuPinGuard;
use crate::error::{BenchError, Result};
use crate::input::{InputData, InputSet, ShapeDescriptor};
use crate::registry::{BenchmarkCase, InputMode, VariantRegistry};
use crate::report::{find_anomalies, DEFAULT_ANOMALY_FACTOR};
use crate::variant::{Accumulator, Output, Variant};

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Never pin
    Off,
    /// Pin once for the whole run (minimal overhead)
    #[default]
    Global,
    /// Pin/unpin around each timed invocation
    PerExecution,
}

/// Order in which variants are visited inside a round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundOrder {
    /// Registration order every round
    Fixed,
    /// Registration order, starting one variant later each round
    #[default]
    Rotated,
    /// Fresh seeded permutation every round
    Shuffled,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of timed rounds; each variant gets one sample per round (default: 50)
    pub repetitions: usize,
    /// Untimed invocations per variant before measuring (default: 5)
    pub warmup: usize,
    /// CPU pinning strategy (default: Global)
    pub pin_strategy: PinStrategy,
    /// Variant order within a round (default: Rotated)
    pub round_order: RoundOrder,
    /// Seed for `RoundOrder::Shuffled`
    pub order_seed: u64,
    /// Samples above `anomaly_factor * median` are logged and flagged (default: 10)
    pub anomaly_factor: f64,
    /// Restore the input before every invocation even for shared-input cases
    pub force_fresh_input: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            repetitions: 50,
            warmup: 5,
            pin_strategy: PinStrategy::default(),
            round_order: RoundOrder::default(),
            order_seed: 0x5eed_0f_0de5,
            anomaly_factor: DEFAULT_ANOMALY_FACTOR,
            force_fresh_input: false,
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig("repetitions must be > 0".into()));
        }
        if self.anomaly_factor.is_nan() || self.anomaly_factor <= 1.0 {
            return Err(BenchError::InvalidConfig(format!(
                "anomaly_factor must be > 1, got {}",
                self.anomaly_factor
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Cancellation
// ============================================================================

/// Cooperative cancellation flag, checked between rounds.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Results
// ============================================================================

/// One timing measurement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub variant: Arc<str>,
    /// Elapsed measurement in [`unit_name`] units
    pub value: u64,
    /// Round this sample was taken in
    pub repetition: usize,
}

/// All samples of one variant, in repetition order.
#[derive(Clone, Debug)]
pub struct VariantSamples {
    pub variant: String,
    pub description: String,
    pub samples: Vec<Sample>,
}

/// Raw result of one run.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub case: String,
    pub category: String,
    pub unit: &'static str,
    pub shape: ShapeDescriptor,
    /// Effective mode, after `force_fresh_input`
    pub input_mode: InputMode,
    /// Per-variant samples, baseline first
    pub variants: Vec<VariantSamples>,
    /// Variant indices in the order they were timed
    pub schedule: Vec<usize>,
    /// Rounds completed
    pub rounds: usize,
    /// False when the run was cancelled before all rounds completed
    pub complete: bool,
    /// Final accumulator total
    pub sink: u64,
}

impl RunOutcome {
    pub fn samples_of(&self, variant: &str) -> Option<&[Sample]> {
        self.variants
            .iter()
            .find(|v| v.variant == variant)
            .map(|v| v.samples.as_slice())
    }
}

// ============================================================================
// Engine
// ============================================================================

pub struct TimingEngine<'r> {
    registry: &'r VariantRegistry,
    config: TimingConfig,
}

impl<'r> TimingEngine<'r> {
    pub fn new(registry: &'r VariantRegistry, config: TimingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// Shape and correctness checks only, no timing.
    pub fn verify(&self, case: &BenchmarkCase, input: &InputSet) -> Result<()> {
        let variants = self.registry.resolve(case)?;
        check_shapes(case, &variants, input)?;
        check_correctness(case, &variants, input)
    }

    /// Measure every variant of `case` on `input`.
    pub fn run(
        &self,
        case: &BenchmarkCase,
        input: &InputSet,
        cancel: &CancelToken,
    ) -> Result<RunOutcome> {
        let variants = self.registry.resolve(case)?;
        check_shapes(case, &variants, input)?;
        check_correctness(case, &variants, input)?;

        let config = &self.config;
        let fresh = config.force_fresh_input || case.input_mode() == InputMode::FreshPerRepetition;
        let pristine = input.data();
        log::info!(
            "case '{}': {} variants, {} reps, {} warmup, {} input",
            case.name(),
            variants.len(),
            config.repetitions,
            config.warmup,
            if fresh { "fresh" } else { "shared" }
        );

        let mut working: Vec<InputData> = variants.iter().map(|_| pristine.clone()).collect();
        let mut acc = Accumulator::new();

        let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

        log::debug!("case '{}': warmup", case.name());
        for (variant, data) in variants.iter().zip(working.iter_mut()) {
            for _ in 0..config.warmup {
                if fresh {
                    data.restore_from(pristine);
                }
                black_box(variant.invoke(data, &mut acc));
            }
        }
        if !fresh {
            // Warmup must not leak mutations into the first timed round
            for data in &mut working {
                data.restore_from(pristine);
            }
        }

        let ids: Vec<Arc<str>> = variants.iter().map(|v| Arc::from(v.name())).collect();
        let mut measurements: Vec<Vec<Sample>> = variants
            .iter()
            .map(|_| Vec::with_capacity(config.repetitions))
            .collect();
        let mut schedule = Vec::with_capacity(config.repetitions * variants.len());
        let mut order: Vec<usize> = (0..variants.len()).collect();
        let mut rng = StdRng::seed_from_u64(config.order_seed);
        let mut rounds = 0;

        log::debug!("case '{}': measuring", case.name());
        for round in 0..config.repetitions {
            if cancel.is_cancelled() {
                log::warn!(
                    "case '{}' cancelled after {} of {} rounds",
                    case.name(),
                    round,
                    config.repetitions
                );
                break;
            }
            round_order(config, round, &mut order, &mut rng);

            for &idx in &order {
                let data = &mut working[idx];
                if fresh {
                    data.restore_from(pristine);
                }
                let _per_exec_pin =
                    (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
                let start = now();
                let out = variants[idx].invoke(data, &mut acc);
                let value = elapsed(start);
                black_box(out);

                measurements[idx].push(Sample {
                    variant: Arc::clone(&ids[idx]),
                    value,
                    repetition: round,
                });
                schedule.push(idx);
            }
            rounds += 1;
        }

        let sink = black_box(acc.total());
        let outcome = RunOutcome {
            case: case.name().to_string(),
            category: case.category().to_string(),
            unit: unit_name(),
            shape: case.shape(),
            input_mode: if fresh {
                InputMode::FreshPerRepetition
            } else {
                InputMode::Shared
            },
            variants: variants
                .iter()
                .zip(measurements)
                .map(|(variant, samples)| VariantSamples {
                    variant: variant.name().to_string(),
                    description: variant.description().to_string(),
                    samples,
                })
                .collect(),
            schedule,
            rounds,
            complete: rounds == config.repetitions,
            sink,
        };
        log_anomalies(&outcome, config.anomaly_factor);
        log::info!("case '{}': {} rounds done", case.name(), rounds);
        Ok(outcome)
    }
}

fn round_order(config: &TimingConfig, round: usize, order: &mut [usize], rng: &mut StdRng) {
    match config.round_order {
        RoundOrder::Fixed => {}
        RoundOrder::Rotated => {
            let n = order.len();
            for (k, slot) in order.iter_mut().enumerate() {
                *slot = (round + k) % n;
            }
        }
        RoundOrder::Shuffled => order.shuffle(rng),
    }
}

fn check_shapes(case: &BenchmarkCase, variants: &[&Variant], input: &InputSet) -> Result<()> {
    for variant in variants {
        if variant.shape() != input.shape() {
            return Err(BenchError::ShapeMismatch {
                case: case.name().to_string(),
                variant: variant.name().to_string(),
                expected: variant.shape(),
                actual: input.shape(),
            });
        }
    }
    Ok(())
}

/// Run each variant once on its own copy of the input and compare both the
/// returned [`Output`] and the input it leaves behind with the baseline's.
fn check_correctness(case: &BenchmarkCase, variants: &[&Variant], input: &InputSet) -> Result<()> {
    let Some((baseline, rest)) = variants.split_first() else {
        return Ok(());
    };

    let mut expected_input = input.data().clone();
    let expected = baseline.invoke(&mut expected_input, &mut Accumulator::new());

    for variant in rest {
        let mut data = input.data().clone();
        let actual = variant.invoke(&mut data, &mut Accumulator::new());

        let detail = if actual != expected {
            Some(format!("output {}", describe_output_diff(&expected, &actual)))
        } else if data != expected_input {
            Some("mutated input differs".to_string())
        } else {
            None
        };

        if let Some(detail) = detail {
            return Err(BenchError::CorrectnessViolation {
                case: case.name().to_string(),
                variant: variant.name().to_string(),
                baseline: baseline.name().to_string(),
                detail,
            });
        }
    }
    log::debug!("case '{}': {} variants agree", case.name(), variants.len());
    Ok(())
}

fn describe_output_diff(expected: &Output, actual: &Output) -> String {
    fn first_diff<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
        a.iter().zip(b).position(|(x, y)| x != y)
    }

    let index = match (expected, actual) {
        (Output::Ints(a), Output::Ints(b)) if a.len() == b.len() => first_diff(a, b),
        (Output::Bytes(a), Output::Bytes(b)) if a.len() == b.len() => first_diff(a, b),
        _ => None,
    };
    match index {
        Some(i) => format!("differs first at index {i}"),
        None => {
            let mut text = format!("expected {expected:?}, got {actual:?}");
            if text.len() > 160 {
                let cut = (0..=157).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0);
                text.truncate(cut);
                text.push_str("...");
            }
            text
        }
    }
}

fn log_anomalies(outcome: &RunOutcome, factor: f64) {
    for variant in &outcome.variants {
        let (median, flagged) = find_anomalies(&variant.samples, factor);
        for sample in flagged {
            log::warn!(
                "{}",
                BenchError::TimingAnomaly {
                    case: outcome.case.clone(),
                    variant: variant.variant.clone(),
                    repetition: sample.repetition,
                    value: sample.value,
                    median,
                    factor,
                }
            );
        }
    }
}

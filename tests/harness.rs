//! End-to-end runs through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use micro_variant_bench::prelude::*;
use micro_variant_bench::report::{to_csv, to_json};

fn generator() -> InputGenerator {
    InputGenerator::new(GeneratorConfig::default()).unwrap()
}

#[test]
fn branch_hints_run_produces_finite_positive_means() {
    let registry = build_registry().unwrap();
    let case = registry.case("branch_hints").unwrap();
    assert_eq!(case.shape(), ShapeDescriptor::Tagged { len: 100_000 });

    let input = generator().generate(case.shape(), 42).unwrap();
    let config = TimingConfig {
        repetitions: 50,
        warmup: 5,
        ..TimingConfig::default()
    };
    let engine = TimingEngine::new(&registry, config).unwrap();
    let outcome = engine.run(case, &input, &CancelToken::new()).unwrap();

    assert!(outcome.complete);
    assert_eq!(outcome.rounds, 50);
    for variant in ["branch_hints/likely", "branch_hints/unlikely"] {
        let samples = outcome.samples_of(variant).unwrap();
        assert_eq!(samples.len(), 50);
        let report = summarize(variant, samples);
        assert!(report.mean.is_finite() && report.mean > 0.0, "{report:?}");
    }

    let case_report = CaseReport::from_outcome(&outcome, engine.config().anomaly_factor);
    assert_eq!(case_report.baseline, "branch_hints/likely");
    assert_eq!(case_report.rows[0].speedup, 1.0);
}

#[test]
fn unknown_names_are_not_found() {
    let registry = build_registry().unwrap();
    assert!(matches!(
        registry.get("nonexistent_case"),
        Err(BenchError::NotFound { .. })
    ));
    assert!(matches!(
        registry.case("nonexistent_case"),
        Err(BenchError::NotFound { kind: "case", .. })
    ));
}

#[test]
fn shape_mismatch_is_reported_before_any_invocation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let shape = ShapeDescriptor::Matrix { dim: 100 };

    let mut registry = VariantRegistry::new();
    for name in ["grid/a", "grid/b"] {
        let calls = Arc::clone(&calls);
        registry
            .register(name, shape, move |_, _| {
                calls.fetch_add(1, Ordering::Relaxed);
                Output::Unit
            })
            .unwrap();
    }
    registry
        .add_case(BenchmarkCase::new("grid", "test", shape, ["grid/a", "grid/b"]))
        .unwrap();

    let input = generator()
        .generate(ShapeDescriptor::Sequence { len: 50 }, 1)
        .unwrap();
    let engine = TimingEngine::new(&registry, TimingConfig::default()).unwrap();
    let case = registry.case("grid").unwrap();

    let err = engine.run(case, &input, &CancelToken::new()).unwrap_err();
    match err {
        BenchError::ShapeMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, shape);
            assert_eq!(actual, ShapeDescriptor::Sequence { len: 50 });
        }
        other => panic!("expected ShapeMismatch, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
fn generation_is_deterministic_per_seed() {
    let generator = generator();
    for case in build_registry().unwrap().cases() {
        let a = generator.generate(case.shape(), 7).unwrap();
        let b = generator.generate(case.shape(), 7).unwrap();
        assert_eq!(a.data(), b.data(), "case {}", case.name());
    }
}

#[test]
fn every_round_visits_each_variant_once() {
    let registry = build_registry().unwrap();
    let case = registry.case("duffs_device").unwrap();
    let input = generator().generate(case.shape(), 3).unwrap();

    for round_order in [RoundOrder::Fixed, RoundOrder::Rotated, RoundOrder::Shuffled] {
        let config = TimingConfig {
            repetitions: 12,
            warmup: 0,
            round_order,
            pin_strategy: PinStrategy::Off,
            ..TimingConfig::default()
        };
        let engine = TimingEngine::new(&registry, config).unwrap();
        let outcome = engine.run(case, &input, &CancelToken::new()).unwrap();

        let v = case.variant_names().len();
        assert_eq!(outcome.schedule.len(), 12 * v);
        for window in outcome.schedule.chunks(v) {
            let mut seen = window.to_vec();
            seen.sort_unstable();
            assert_eq!(seen, (0..v).collect::<Vec<_>>(), "{round_order:?}");
        }
    }
}

#[test]
fn summarize_is_idempotent() {
    let registry = build_registry().unwrap();
    let case = registry.case("alignment").unwrap();
    let input = generator().generate(case.shape(), 9).unwrap();
    let config = TimingConfig {
        repetitions: 10,
        warmup: 1,
        ..TimingConfig::default()
    };
    let engine = TimingEngine::new(&registry, config).unwrap();
    let outcome = engine.run(case, &input, &CancelToken::new()).unwrap();

    let samples = outcome.samples_of("alignment/bytewise").unwrap();
    assert_eq!(
        summarize("alignment/bytewise", samples),
        summarize("alignment/bytewise", samples)
    );
}

#[test]
fn cancelled_run_is_partial() {
    let registry = build_registry().unwrap();
    let case = registry.case("loop_fusion").unwrap();
    let input = generator().generate(case.shape(), 5).unwrap();
    let engine = TimingEngine::new(&registry, TimingConfig::default()).unwrap();

    let cancel = CancelToken::new();
    cancel.cancel();
    let outcome = engine.run(case, &input, &cancel).unwrap();
    assert!(!outcome.complete);
    assert_eq!(outcome.rounds, 0);
    assert!(outcome.schedule.is_empty());
}

#[test]
fn reports_export_to_csv_and_json_files() {
    let registry = build_registry().unwrap();
    let config = TimingConfig {
        repetitions: 5,
        warmup: 1,
        ..TimingConfig::default()
    };
    let factor = config.anomaly_factor;
    let engine = TimingEngine::new(&registry, config).unwrap();
    let generator = generator();

    let mut reports = Vec::new();
    for name in ["const_branch", "cache_access"] {
        let case = registry.case(name).unwrap();
        let input = generator.generate(case.shape(), 11).unwrap();
        let outcome = engine.run(case, &input, &CancelToken::new()).unwrap();
        reports.push(CaseReport::from_outcome(&outcome, factor));
    }

    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("report.csv");
    std::fs::write(&csv_path, to_csv(&reports).unwrap()).unwrap();
    let csv_text = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv_text.lines();
    assert!(lines.next().unwrap().starts_with("case,category,unit,complete,variant"));
    assert_eq!(lines.count(), 4);
    assert!(csv_text.contains("const_branch/const_generic"));

    let json_path = dir.path().join("report.json");
    std::fs::write(&json_path, to_json(&reports).unwrap()).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    let cases = parsed.as_array().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[1]["case"], "cache_access");
    assert_eq!(cases[1]["baseline"], "cache_access/row_major");
    assert_eq!(cases[1]["rows"].as_array().unwrap().len(), 2);
}

//! Result reporter: statistics, speedups and table / CSV / JSON rendering.
//!
//! Nothing here prints. The CLI decides where the rendered text goes.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::Result;
use crate::input::ShapeDescriptor;
use crate::registry::InputMode;
use crate::utils::timer::{RunOutcome, Sample};

/// Samples above this multiple of the median are flagged
pub const DEFAULT_ANOMALY_FACTOR: f64 = 10.0;

/// Descriptive statistics for one variant's samples.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub variant: String,
    pub samples: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: u64,
    pub max: u64,
    /// Repetition indices of samples above `factor * median`
    pub anomalies: Vec<usize>,
}

/// Summarize with [`DEFAULT_ANOMALY_FACTOR`].
pub fn summarize(variant: &str, samples: &[Sample]) -> Report {
    summarize_with_threshold(variant, samples, DEFAULT_ANOMALY_FACTOR)
}

pub fn summarize_with_threshold(variant: &str, samples: &[Sample], factor: f64) -> Report {
    if samples.is_empty() {
        return Report {
            variant: variant.to_string(),
            samples: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0,
            max: 0,
            anomalies: Vec::new(),
        };
    }

    let mut sorted: Vec<u64> = samples.iter().map(|s| s.value).collect();
    sorted.sort_unstable();

    let n = sorted.len();
    let sum: u128 = sorted.iter().map(|&v| u128::from(v)).sum();
    let mean = sum as f64 / n as f64;

    // Sample standard deviation (n - 1)
    let variance = sorted
        .iter()
        .map(|&v| {
            let diff = v as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / (n - 1).max(1) as f64;

    let (_, flagged) = find_anomalies(samples, factor);

    Report {
        variant: variant.to_string(),
        samples: n,
        mean,
        median: median_of_sorted(&sorted),
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
        anomalies: flagged.iter().map(|s| s.repetition).collect(),
    }
}

fn median_of_sorted(sorted: &[u64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        0.0
    } else if n % 2 == 0 {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    }
}

/// Median of `samples` and the samples strictly above `factor * median`.
pub fn find_anomalies(samples: &[Sample], factor: f64) -> (f64, Vec<&Sample>) {
    let mut sorted: Vec<u64> = samples.iter().map(|s| s.value).collect();
    sorted.sort_unstable();
    let median = median_of_sorted(&sorted);
    if median <= 0.0 {
        return (median, Vec::new());
    }
    let limit = median * factor;
    let flagged = samples.iter().filter(|s| s.value as f64 > limit).collect();
    (median, flagged)
}

/// Relative cost: `mean(a) / mean(b)`.
///
/// `compare(baseline, variant)` is the speedup of `variant` over the baseline.
pub fn compare(a: &Report, b: &Report) -> f64 {
    if b.mean > 0.0 {
        a.mean / b.mean
    } else if a.mean > 0.0 {
        f64::INFINITY
    } else {
        1.0
    }
}

/// One line of a case report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(flatten)]
    pub report: Report,
    /// Baseline mean over this variant's mean
    pub speedup: f64,
}

/// All variants of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseReport {
    pub case: String,
    pub category: String,
    pub unit: String,
    pub shape: ShapeDescriptor,
    pub input_mode: InputMode,
    pub rounds: usize,
    pub complete: bool,
    pub baseline: String,
    /// In case order, baseline first
    pub rows: Vec<ReportRow>,
}

impl CaseReport {
    pub fn from_outcome(outcome: &RunOutcome, anomaly_factor: f64) -> Self {
        let reports: Vec<Report> = outcome
            .variants
            .iter()
            .map(|v| summarize_with_threshold(&v.variant, &v.samples, anomaly_factor))
            .collect();
        let baseline = reports.first().cloned();

        let rows = reports
            .into_iter()
            .map(|report| ReportRow {
                speedup: baseline.as_ref().map_or(1.0, |base| compare(base, &report)),
                report,
            })
            .collect();

        Self {
            case: outcome.case.clone(),
            category: outcome.category.clone(),
            unit: outcome.unit.to_string(),
            shape: outcome.shape,
            input_mode: outcome.input_mode,
            rounds: outcome.rounds,
            complete: outcome.complete,
            baseline: baseline.map(|b| b.variant).unwrap_or_default(),
            rows,
        }
    }

    /// Rows by ascending mean.
    pub fn ranked(&self) -> Vec<&ReportRow> {
        let mut rows: Vec<&ReportRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| a.report.mean.total_cmp(&b.report.mean));
        rows
    }
}

/// Format a measurement for display, e.g. `12.50k cycles`
pub fn format_measurement(value: f64, unit: &str) -> String {
    if value >= 1e9 {
        format!("{:.2}G {}", value / 1e9, unit)
    } else if value >= 1e6 {
        format!("{:.2}M {}", value / 1e6, unit)
    } else if value >= 1e4 {
        format!("{:.2}k {}", value / 1e3, unit)
    } else {
        format!("{:.0} {}", value, unit)
    }
}

/// Human-readable table, fastest variant first.
pub fn format_table(report: &CaseReport) -> String {
    let variant_width = report
        .rows
        .iter()
        .map(|r| r.report.variant.chars().count())
        .max()
        .unwrap_or(0)
        .max("Variant".len());
    let table_width = variant_width + 6 * 14 + 10;
    let unit = report.unit.as_str();

    let mut out = String::new();
    let status = if report.complete { "" } else { ", INCOMPLETE" };
    let _ = writeln!(
        out,
        "  {} [{}] ({} rounds{}, baseline: {})",
        report.case, report.category, report.rounds, status, report.baseline
    );
    let _ = writeln!(out, "  {}", "─".repeat(table_width));
    let _ = writeln!(
        out,
        "  {:<w$} {:>14} {:>14} {:>14} {:>14} {:>14} {:>9}",
        "Variant",
        "Mean",
        "Median",
        "StdDev",
        "Min",
        "Max",
        "Speedup",
        w = variant_width
    );
    let _ = writeln!(out, "  {}", "─".repeat(table_width));

    for row in report.ranked() {
        let r = &row.report;
        let _ = writeln!(
            out,
            "  {:<w$} {:>14} {:>14} {:>14} {:>14} {:>14} {:>8.2}x",
            r.variant,
            format_measurement(r.mean, unit),
            format_measurement(r.median, unit),
            format_measurement(r.std_dev, unit),
            format_measurement(r.min as f64, unit),
            format_measurement(r.max as f64, unit),
            row.speedup,
            w = variant_width
        );
    }

    for row in &report.rows {
        if !row.report.anomalies.is_empty() {
            let _ = writeln!(
                out,
                "  ! {}: {} sample(s) above the anomaly threshold",
                row.report.variant,
                row.report.anomalies.len()
            );
        }
    }
    out
}

/// Flat CSV record; one per variant per case.
#[derive(Serialize)]
struct CsvRecord<'a> {
    case: &'a str,
    category: &'a str,
    unit: &'a str,
    complete: bool,
    variant: &'a str,
    samples: usize,
    mean: f64,
    median: f64,
    std_dev: f64,
    min: u64,
    max: u64,
    speedup: f64,
    anomalies: usize,
    shape: String,
    input_mode: InputMode,
}

pub fn to_csv(reports: &[CaseReport]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for report in reports {
        for row in &report.rows {
            writer.serialize(CsvRecord {
                case: &report.case,
                category: &report.category,
                unit: &report.unit,
                complete: report.complete,
                variant: &row.report.variant,
                samples: row.report.samples,
                mean: row.report.mean,
                median: row.report.median,
                std_dev: row.report.std_dev,
                min: row.report.min,
                max: row.report.max,
                speedup: row.speedup,
                anomalies: row.report.anomalies.len(),
                shape: report.shape.to_string(),
                input_mode: report.input_mode,
            })?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::BenchError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn to_json(reports: &[CaseReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

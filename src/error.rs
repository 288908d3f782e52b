//! Error taxonomy shared by the registry, generator, engine and reporter.

use thiserror::Error;

use crate::input::ShapeDescriptor;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{kind} '{name}' is already registered")]
    DuplicateName { kind: &'static str, name: String },

    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    #[error("case '{case}': variant '{variant}' expects {expected}, got {actual}")]
    ShapeMismatch {
        case: String,
        variant: String,
        expected: ShapeDescriptor,
        actual: ShapeDescriptor,
    },

    #[error("case '{case}': variant '{variant}' disagrees with baseline '{baseline}': {detail}")]
    CorrectnessViolation {
        case: String,
        variant: String,
        baseline: String,
        detail: String,
    },

    /// Never returned by a run; built for the warning line of a flagged sample.
    #[error("case '{case}': variant '{variant}' repetition {repetition} took {value} (median {median}, limit {factor}x)")]
    TimingAnomaly {
        case: String,
        variant: String,
        repetition: usize,
        value: u64,
        median: f64,
        factor: f64,
    },

    #[error("shape {shape} has {elements} elements, below the configured minimum of {minimum}")]
    InputTooSmall {
        shape: ShapeDescriptor,
        elements: usize,
        minimum: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("case '{case}' is invalid: {reason}")]
    InvalidCase { case: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    pub(crate) fn variant_not_found(name: &str) -> Self {
        BenchError::NotFound {
            kind: "variant",
            name: name.to_string(),
        }
    }

    pub(crate) fn case_not_found(name: &str) -> Self {
        BenchError::NotFound {
            kind: "case",
            name: name.to_string(),
        }
    }
}

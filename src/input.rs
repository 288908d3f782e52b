//! Seeded input generation.
//!
//! Every variant of a case sees the same [`InputSet`]. Generation is
//! deterministic for a given seed and shape, which is what lets the
//! correctness precheck compare variants and lets two runs of the same
//! case be compared against each other.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::{BenchError, Result};

/// Shape of the data a variant consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    /// Fixed-length sequence of `i32`.
    Sequence { len: usize },
    /// Square `dim x dim` matrix of `i32`, row-major.
    Matrix { dim: usize },
    /// Raw byte buffer.
    Bytes { len: usize },
    /// Sequence of [`YesNo`] tags.
    Tagged { len: usize },
}

impl ShapeDescriptor {
    /// Saturates for matrix dimensions whose square overflows `usize`.
    pub fn element_count(&self) -> usize {
        match *self {
            ShapeDescriptor::Sequence { len }
            | ShapeDescriptor::Bytes { len }
            | ShapeDescriptor::Tagged { len } => len,
            ShapeDescriptor::Matrix { dim } => dim.saturating_mul(dim),
        }
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShapeDescriptor::Sequence { len } => write!(f, "sequence[{len}]"),
            ShapeDescriptor::Matrix { dim } => write!(f, "matrix[{dim}x{dim}]"),
            ShapeDescriptor::Bytes { len } => write!(f, "bytes[{len}]"),
            ShapeDescriptor::Tagged { len } => write!(f, "tagged[{len}]"),
        }
    }
}

/// Two-valued tag used by the branch hint cases.
///
/// `Yes` is zero so the C variants can test against a plain byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum YesNo {
    Yes = 0,
    No = 1,
}

/// Generated payload, one arm per [`ShapeDescriptor`] kind.
#[derive(Clone, Debug, PartialEq)]
pub enum InputData {
    Sequence(Vec<i32>),
    Matrix { dim: usize, cells: Vec<i32> },
    Bytes(Vec<u8>),
    Tagged(Vec<YesNo>),
}

impl InputData {
    pub fn shape(&self) -> ShapeDescriptor {
        match self {
            InputData::Sequence(v) => ShapeDescriptor::Sequence { len: v.len() },
            InputData::Matrix { dim, .. } => ShapeDescriptor::Matrix { dim: *dim },
            InputData::Bytes(v) => ShapeDescriptor::Bytes { len: v.len() },
            InputData::Tagged(v) => ShapeDescriptor::Tagged { len: v.len() },
        }
    }

    /// Overwrite `self` with `source`, reusing the allocation when the kinds match.
    pub fn restore_from(&mut self, source: &InputData) {
        match (self, source) {
            (InputData::Sequence(dst), InputData::Sequence(src)) => dst.clone_from(src),
            (
                InputData::Matrix { dim, cells },
                InputData::Matrix {
                    dim: src_dim,
                    cells: src_cells,
                },
            ) => {
                *dim = *src_dim;
                cells.clone_from(src_cells);
            }
            (InputData::Bytes(dst), InputData::Bytes(src)) => dst.clone_from(src),
            (InputData::Tagged(dst), InputData::Tagged(src)) => dst.clone_from(src),
            (dst, src) => *dst = src.clone(),
        }
    }

    pub fn as_sequence(&self) -> Option<&[i32]> {
        match self {
            InputData::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut [i32]> {
        match self {
            InputData::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<(usize, &[i32])> {
        match self {
            InputData::Matrix { dim, cells } => Some((*dim, cells)),
            _ => None,
        }
    }

    pub fn as_matrix_mut(&mut self) -> Option<(usize, &mut [i32])> {
        match self {
            InputData::Matrix { dim, cells } => Some((*dim, cells)),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            InputData::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        match self {
            InputData::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_tagged(&self) -> Option<&[YesNo]> {
        match self {
            InputData::Tagged(v) => Some(v),
            _ => None,
        }
    }
}

/// Generated data plus the parameters that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct InputSet {
    shape: ShapeDescriptor,
    seed: u64,
    data: InputData,
}

impl InputSet {
    pub fn shape(&self) -> ShapeDescriptor {
        self.shape
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn data(&self) -> &InputData {
        &self.data
    }
}

/// Generation parameters.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Smallest accepted element count (default: 0, no floor)
    pub min_elements: usize,
    /// Probability of drawing `YesNo::Yes` for tagged shapes (default: 0.9)
    pub yes_probability: f64,
    /// Inclusive lower bound of generated `i32` values (default: -1024)
    pub value_min: i32,
    /// Inclusive upper bound of generated `i32` values (default: 1024)
    pub value_max: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_elements: 0,
            yes_probability: 0.9,
            value_min: -1024,
            value_max: 1024,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.yes_probability) {
            return Err(BenchError::InvalidConfig(format!(
                "yes_probability must be in [0, 1], got {}",
                self.yes_probability
            )));
        }
        if self.value_min > self.value_max {
            return Err(BenchError::InvalidConfig(format!(
                "value_min ({}) exceeds value_max ({})",
                self.value_min, self.value_max
            )));
        }
        Ok(())
    }
}

pub struct InputGenerator {
    config: GeneratorConfig,
}

impl InputGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate input for `shape` from `seed`.
    ///
    /// Fails with [`BenchError::InvalidConfig`] when a matrix cell count
    /// overflows `usize`.
    /// Fails with [`BenchError::InputTooSmall`] when the shape holds fewer
    /// elements than `min_elements`.
    pub fn generate(&self, shape: ShapeDescriptor, seed: u64) -> Result<InputSet> {
        if let ShapeDescriptor::Matrix { dim } = shape {
            if dim.checked_mul(dim).is_none() {
                return Err(BenchError::InvalidConfig(format!(
                    "matrix dimension {dim} overflows the cell count"
                )));
            }
        }
        let elements = shape.element_count();
        if elements < self.config.min_elements {
            return Err(BenchError::InputTooSmall {
                shape,
                elements,
                minimum: self.config.min_elements,
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let range = self.config.value_min..=self.config.value_max;

        let data = match shape {
            ShapeDescriptor::Sequence { len } => InputData::Sequence(
                (0..len).map(|_| rng.random_range(range.clone())).collect(),
            ),
            ShapeDescriptor::Matrix { dim } => InputData::Matrix {
                dim,
                cells: (0..dim * dim)
                    .map(|_| rng.random_range(range.clone()))
                    .collect(),
            },
            ShapeDescriptor::Bytes { len } => {
                let mut bytes = vec![0u8; len];
                rng.fill(bytes.as_mut_slice());
                InputData::Bytes(bytes)
            }
            ShapeDescriptor::Tagged { len } => InputData::Tagged(
                (0..len)
                    .map(|_| {
                        if rng.random_bool(self.config.yes_probability) {
                            YesNo::Yes
                        } else {
                            YesNo::No
                        }
                    })
                    .collect(),
            ),
        };

        log::debug!("generated {} from seed {}", shape, seed);
        Ok(InputSet { shape, seed, data })
    }
}

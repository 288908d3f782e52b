//! Variants: the callables under comparison, plus what they consume and produce.

use std::fmt;

use crate::input::{InputData, ShapeDescriptor};

/// Observable result of one invocation.
///
/// The correctness precheck compares these with `==` across a case, so
/// every variant of a case must return the same arm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Nothing returned; the mutated input is the observable effect
    Unit,
    Count(u64),
    Int(i64),
    Pair(i64, i64),
    Ints(Vec<i32>),
    Bytes(Vec<u8>),
}

/// Per-run sink handed to every invocation.
///
/// Variants fold side effects here so the optimizer cannot drop work whose
/// result is otherwise unused. The engine owns one per run.
#[derive(Debug, Default)]
pub struct Accumulator {
    total: u64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn bump(&mut self) {
        self.total = self.total.wrapping_add(1);
    }

    #[inline(always)]
    pub fn add(&mut self, value: u64) {
        self.total = self.total.wrapping_add(value);
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Boxed variant body.
pub type VariantFn = Box<dyn Fn(&mut InputData, &mut Accumulator) -> Output + Send + Sync>;

/// A named implementation of one technique.
pub struct Variant {
    name: String,
    description: String,
    shape: ShapeDescriptor,
    run: VariantFn,
}

impl Variant {
    pub fn new<F>(name: impl Into<String>, shape: ShapeDescriptor, run: F) -> Self
    where
        F: Fn(&mut InputData, &mut Accumulator) -> Output + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            shape,
            run: Box::new(run),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn shape(&self) -> ShapeDescriptor {
        self.shape
    }

    #[inline(always)]
    pub fn invoke(&self, input: &mut InputData, acc: &mut Accumulator) -> Output {
        (self.run)(input, acc)
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// Information about a typed implementation before it is boxed into a [`Variant`].
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Short identifier within the case (e.g., "original", "x86_64-sse2")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator_wraps() {
        let mut acc = Accumulator::new();
        acc.add(u64::MAX);
        acc.bump();
        assert_eq!(acc.total(), 0);
    }

    #[test]
    fn test_invoke_runs_body() {
        let variant = Variant::new("len", ShapeDescriptor::Bytes { len: 3 }, |input, acc| {
            let len = input.as_bytes().map_or(0, |b| b.len());
            acc.add(len as u64);
            Output::Count(len as u64)
        })
        .with_description("byte count");

        let mut input = InputData::Bytes(vec![1, 2, 3]);
        let mut acc = Accumulator::new();
        assert_eq!(variant.invoke(&mut input, &mut acc), Output::Count(3));
        assert_eq!(acc.total(), 3);
        assert_eq!(variant.description(), "byte count");
    }
}

//! Variant registry and benchmark cases.
//!
//! Variants are registered once under a unique name and never removed.
//! A [`BenchmarkCase`] refers to its variants by name; the first one listed
//! is the baseline every other variant is compared against.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{BenchError, Result};
use crate::input::{InputData, ShapeDescriptor};
use crate::variant::{Accumulator, Output, Variant};

/// How a case's input is handed to repeated invocations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// One working copy per variant, reused across repetitions
    #[default]
    Shared,
    /// Working copy restored from the pristine input before every invocation
    FreshPerRepetition,
}

/// A group of variants claimed to be equivalent.
#[derive(Clone, Debug)]
pub struct BenchmarkCase {
    name: String,
    category: String,
    description: String,
    shape: ShapeDescriptor,
    input_mode: InputMode,
    variants: Vec<String>,
}

impl BenchmarkCase {
    pub fn new<I, S>(
        name: impl Into<String>,
        category: impl Into<String>,
        shape: ShapeDescriptor,
        variants: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            category: category.into(),
            description: String::new(),
            shape,
            input_mode: InputMode::default(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn shape(&self) -> ShapeDescriptor {
        self.shape
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn variant_names(&self) -> &[String] {
        &self.variants
    }

    /// Name of the baseline variant.
    pub fn baseline(&self) -> &str {
        self.variants.first().map(String::as_str).unwrap_or_default()
    }
}

/// Write-once registry of variants and cases.
#[derive(Default)]
pub struct VariantRegistry {
    variants: Vec<Variant>,
    variant_index: HashMap<String, usize>,
    cases: Vec<BenchmarkCase>,
    case_index: HashMap<String, usize>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an undescribed variant.
    pub fn register<F>(&mut self, name: &str, shape: ShapeDescriptor, run: F) -> Result<()>
    where
        F: Fn(&mut InputData, &mut Accumulator) -> Output + Send + Sync + 'static,
    {
        self.register_variant(Variant::new(name, shape, run))
    }

    /// Register a fully built variant.
    pub fn register_variant(&mut self, variant: Variant) -> Result<()> {
        if self.variant_index.contains_key(variant.name()) {
            return Err(BenchError::DuplicateName {
                kind: "variant",
                name: variant.name().to_string(),
            });
        }
        self.variant_index
            .insert(variant.name().to_string(), self.variants.len());
        self.variants.push(variant);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Variant> {
        self.variant_index
            .get(name)
            .map(|&idx| &self.variants[idx])
            .ok_or_else(|| BenchError::variant_not_found(name))
    }

    /// Register a case after checking its variants exist and share its shape.
    pub fn add_case(&mut self, case: BenchmarkCase) -> Result<()> {
        if self.case_index.contains_key(case.name()) {
            return Err(BenchError::DuplicateName {
                kind: "case",
                name: case.name().to_string(),
            });
        }
        if case.variants.len() < 2 {
            return Err(BenchError::InvalidCase {
                case: case.name().to_string(),
                reason: format!("needs at least two variants, has {}", case.variants.len()),
            });
        }
        for name in &case.variants {
            let variant = self.get(name)?;
            if variant.shape() != case.shape() {
                return Err(BenchError::ShapeMismatch {
                    case: case.name().to_string(),
                    variant: name.clone(),
                    expected: variant.shape(),
                    actual: case.shape(),
                });
            }
        }
        if let Some(dup) = first_duplicate(&case.variants) {
            return Err(BenchError::InvalidCase {
                case: case.name().to_string(),
                reason: format!("variant '{dup}' listed twice"),
            });
        }

        self.case_index
            .insert(case.name().to_string(), self.cases.len());
        self.cases.push(case);
        Ok(())
    }

    pub fn case(&self, name: &str) -> Result<&BenchmarkCase> {
        self.case_index
            .get(name)
            .map(|&idx| &self.cases[idx])
            .ok_or_else(|| BenchError::case_not_found(name))
    }

    /// All cases in registration order.
    pub fn cases(&self) -> &[BenchmarkCase] {
        &self.cases
    }

    /// All variants in registration order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn case_names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&BenchmarkCase> {
        self.cases
            .iter()
            .filter(|c| c.category() == category)
            .collect()
    }

    /// Variants of `case`, baseline first.
    pub fn resolve(&self, case: &BenchmarkCase) -> Result<Vec<&Variant>> {
        case.variants.iter().map(|name| self.get(name)).collect()
    }
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    names
        .iter()
        .enumerate()
        .find(|(i, name)| names[..*i].contains(name))
        .map(|(_, name)| name.as_str())
}

/// Build the default registry with every built-in case.
pub fn build_registry() -> Result<VariantRegistry> {
    let mut registry = VariantRegistry::new();

    // Register all cases here
    crate::control_flow::branch_hints::register(&mut registry)?;
    crate::control_flow::const_branch::register(&mut registry)?;
    crate::control_flow::devirtualization::register(&mut registry)?;
    crate::loops::loop_unrolling::register(&mut registry)?;
    crate::loops::loop_interchange::register(&mut registry)?;
    crate::loops::loop_fusion::register(&mut registry)?;
    crate::loops::loop_fission::register(&mut registry)?;
    crate::loops::data_dependency::register(&mut registry)?;
    crate::loops::duffs_device::register(&mut registry)?;
    crate::memory::simd_add::register(&mut registry)?;
    crate::memory::cache_access::register(&mut registry)?;
    crate::memory::prefetch::register(&mut registry)?;
    crate::memory::alignment::register(&mut registry)?;

    Ok(registry)
}

//! Tests for compile-time branch implementations

use super::code::{available_variants, transform_sum_runtime};

/// Verify all variants produce the same results as the runtime version
pub fn verify_all() -> Result<(), String> {
    let inputs: Vec<Vec<i32>> = vec![
        vec![],
        vec![0],
        vec![-5, 7, 1000, -1024],
        (-300..300).collect(),
    ];

    for variant in available_variants() {
        for values in &inputs {
            let expected = transform_sum_runtime(values);
            let actual = (variant.function)(values);
            if actual != expected {
                return Err(format!(
                    "Variant '{}' failed for {} values: expected {}, got {}",
                    variant.name,
                    values.len(),
                    expected,
                    actual
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_flow::const_branch::code::transform_sum_const;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_expected_computation() {
        // (1*3+1) + (2*3+1) = 11
        assert_eq!(transform_sum_runtime(&[1, 2]), 11);
        assert_eq!(transform_sum_const::<false>(&[1, 2]), 11);
    }

    #[test]
    fn test_negate_instantiation() {
        assert_eq!(transform_sum_const::<true>(&[1, 2, -10]), 7);
    }
}

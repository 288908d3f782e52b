//! Tests for devirtualization implementations

use super::code::available_variants;

/// Verify every dispatch style agrees on a range of inputs
pub fn verify_all() -> Result<(), String> {
    let inputs: Vec<Vec<i32>> = vec![vec![], vec![1], (-1024..1024).collect(), vec![i32::MAX; 16]];

    for values in &inputs {
        let expected: i64 = values.iter().map(|&v| v as i64 * 3).sum();
        for variant in available_variants() {
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
    use crate::control_flow::devirtualization::code::{sum_dyn, sum_static};

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_small_sum() {
        assert_eq!(sum_static(&[1, 2, 3]), 18);
        assert_eq!(sum_dyn(&[1, 2, 3]), 18);
    }
}

//! Tests for loop fusion implementations

use super::code::available_variants;

/// Verify all variants against a straightforward iterator reduction
pub fn verify_all() -> Result<(), String> {
    let inputs: Vec<Vec<i32>> = vec![vec![], vec![-3], (-1024..=1024).collect()];
    for values in &inputs {
        let expected = (
            values.iter().map(|&v| v as i64).sum::<i64>(),
            values.iter().map(|&v| v as i64 * v as i64).sum::<i64>(),
        );
        for variant in available_variants() {
            let actual = (variant.function)(values);
            if actual != expected {
                return Err(format!(
                    "Variant '{}' failed: expected {:?}, got {:?}",
                    variant.name, expected, actual
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loops::loop_fusion::code::moments_fused;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_small_input() {
        assert_eq!(moments_fused(&[1, -2, 3]), (2, 14));
    }
}

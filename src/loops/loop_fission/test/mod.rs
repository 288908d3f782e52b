//! Tests for loop fission implementations

use super::code::{available_variants, hash_and_rewrite_combined};

/// Verify all variants return the same hash and leave the same buffer
pub fn verify_all() -> Result<(), String> {
    let inputs: Vec<Vec<i32>> = vec![vec![], vec![7], (-500..500).rev().collect()];
    for original in &inputs {
        let mut reference = original.clone();
        let expected = hash_and_rewrite_combined(&mut reference);
        for variant in available_variants() {
            let mut values = original.clone();
            let hash = (variant.function)(&mut values);
            if hash != expected || values != reference {
                return Err(format!(
                    "Variant '{}' diverged for {} values",
                    variant.name,
                    original.len()
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_rewrites_in_place() {
        let mut values = vec![1, 2];
        // 1*31 + 2 = 33
        assert_eq!(hash_and_rewrite_combined(&mut values), 33);
        assert_eq!(values, vec![3 ^ 5, 6 ^ 5]);
    }
}

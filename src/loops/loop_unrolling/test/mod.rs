//! Tests for loop unrolling implementations

use super::code::available_variants;

/// Verify all variants fill every length correctly, including remainders
pub fn verify_all() -> Result<(), String> {
    for len in [0usize, 1, 3, 4, 5, 7, 8, 4096, 4099] {
        let expected: Vec<i32> = (0..len as i32).collect();
        for variant in available_variants() {
            let mut values = vec![-1; len];
            (variant.function)(&mut values);
            if values != expected {
                return Err(format!("Variant '{}' failed for len {}", variant.name, len));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loops::loop_unrolling::code::fill_unrolled_x4;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_fill_is_idempotent() {
        let mut values = vec![9; 10];
        fill_unrolled_x4(&mut values);
        let once = values.clone();
        fill_unrolled_x4(&mut values);
        assert_eq!(values, once);
    }
}

//! Tests for prefetch implementations

use super::code::{available_variants, touch_plain};

/// Verify every variant updates the same elements as the plain loop
pub fn verify_all() -> Result<(), String> {
    for len in [0usize, 1, 4, 15, 16, 17, 33, 1000] {
        let original: Vec<i32> = (0..len as i32).map(|i| i * 3).collect();
        let mut expected = original.clone();
        touch_plain(&mut expected);
        for variant in available_variants() {
            let mut values = original.clone();
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

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_plain_stride() {
        let mut values = vec![0; 9];
        touch_plain(&mut values);
        assert_eq!(values, vec![1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }
}

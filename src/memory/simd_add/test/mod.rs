//! Tests for SIMD addition implementations

use super::code::available_variants;

/// Verify all variants against a wrapping iterator add
pub fn verify_all() -> Result<(), String> {
    for len in [0usize, 1, 3, 4, 7, 8, 9, 31, 2048] {
        let src: Vec<i32> = (0..len as i32).map(|i| i * 13 - 500).collect();
        let original: Vec<i32> = (0..len as i32).map(|i| 1000 - i * 7).collect();
        let expected: Vec<i32> = original
            .iter()
            .zip(&src)
            .map(|(d, s)| d.wrapping_add(*s))
            .collect();
        for variant in available_variants() {
            let mut dst = original.clone();
            (variant.function)(&mut dst, &src);
            if dst != expected {
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
    fn test_wrapping_overflow() {
        for variant in available_variants() {
            let mut dst = vec![i32::MAX; 5];
            (variant.function)(&mut dst, &[1; 5]);
            assert_eq!(dst, vec![i32::MIN; 5], "variant {}", variant.name);
        }
    }
}

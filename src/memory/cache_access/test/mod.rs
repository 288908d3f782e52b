//! Tests for traversal order implementations

use super::code::available_variants;

/// Verify both orders increment every cell exactly once
pub fn verify_all() -> Result<(), String> {
    for dim in [0usize, 1, 3, 64] {
        let original: Vec<i32> = (0..(dim * dim) as i32).collect();
        let expected: Vec<i32> = original.iter().map(|v| v + 1).collect();
        for variant in available_variants() {
            let mut cells = original.clone();
            (variant.function)(dim, &mut cells);
            if cells != expected {
                return Err(format!("Variant '{}' failed for dim {}", variant.name, dim));
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
}

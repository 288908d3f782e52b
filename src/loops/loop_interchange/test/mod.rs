//! Tests for loop interchange implementations

use super::code::{available_variants, square_ijk};

/// Verify all variants agree with the `ijk` nest
pub fn verify_all() -> Result<(), String> {
    for dim in [0usize, 1, 2, 5, 16] {
        let m: Vec<i32> = (0..(dim * dim) as i32).map(|v| v * 7 - 40).collect();
        let expected = square_ijk(dim, &m);
        for variant in available_variants() {
            if (variant.function)(dim, &m) != expected {
                return Err(format!("Variant '{}' failed for dim {}", variant.name, dim));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loops::loop_interchange::code::square_ikj;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_known_product() {
        // [[1,2],[3,4]]^2 = [[7,10],[15,22]]
        let m = [1, 2, 3, 4];
        assert_eq!(square_ijk(2, &m), vec![7, 10, 15, 22]);
        assert_eq!(square_ikj(2, &m), vec![7, 10, 15, 22]);
    }
}

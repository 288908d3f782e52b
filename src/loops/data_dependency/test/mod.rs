//! Tests for data dependency implementations

use super::code::{available_variants, dependency_carried};

fn arrays(n: usize) -> (Vec<i32>, Vec<i32>, Vec<i32>) {
    let a = (0..n as i32).map(|i| i * 2 - 7).collect();
    let b = (0..n as i32).map(|i| 100 - i * 3).collect();
    let c = (0..n as i32).map(|i| i * i % 17).collect();
    (a, b, c)
}

/// Verify every variant leaves `a` and `b` exactly as the carried loop does
pub fn verify_all() -> Result<(), String> {
    for n in [0usize, 1, 2, 3, 10, 1000] {
        let (mut ref_a, mut ref_b, c) = arrays(n);
        let expected = dependency_carried(&mut ref_a, &mut ref_b, &c);
        for variant in available_variants() {
            let (mut a, mut b, _) = arrays(n);
            let result = (variant.function)(&mut a, &mut b, &c);
            if result != expected || a != ref_a || b != ref_b {
                return Err(format!("Variant '{}' diverged for n = {}", variant.name, n));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loops::data_dependency::code::dependency_hoisted;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_three_elements() {
        let mut a = vec![1, 1, 1];
        let mut b = vec![10, 20, 30];
        let c = [1, 2, 3];
        // b becomes [10, 21, 32]; a[0] += 10, a[1] += 21, a[2] untouched
        assert_eq!(dependency_hoisted(&mut a, &mut b, &c), 32);
        assert_eq!(a, vec![11, 22, 1]);
        assert_eq!(b, vec![10, 21, 32]);
    }
}

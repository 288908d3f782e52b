//! Tests for branch hint implementations

use super::code::{available_variants, count_likely};
use crate::input::YesNo;
use crate::variant::Accumulator;

fn pattern() -> Vec<YesNo> {
    (0..1000)
        .map(|i| if i % 7 == 0 { YesNo::No } else { YesNo::Yes })
        .collect()
}

/// Verify all variants count and accumulate like the reference
pub fn verify_all() -> Result<(), String> {
    let tags = pattern();
    let mut reference_acc = Accumulator::new();
    let expected = count_likely(&tags, &mut reference_acc);

    for variant in available_variants() {
        let mut acc = Accumulator::new();
        let actual = (variant.function)(&tags, &mut acc);
        if actual != expected || acc.total() != reference_acc.total() {
            return Err(format!(
                "Variant '{}' counted {} (sink {}), expected {} (sink {})",
                variant.name,
                actual,
                acc.total(),
                expected,
                reference_acc.total()
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_flow::branch_hints::code::{branch_likely, branch_unlikely};

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_single_tags() {
        let mut acc = Accumulator::new();
        assert!(branch_likely(YesNo::Yes, &mut acc));
        assert!(!branch_likely(YesNo::No, &mut acc));
        assert!(branch_unlikely(YesNo::Yes, &mut acc));
        assert!(!branch_unlikely(YesNo::No, &mut acc));
        assert_eq!(acc.total(), 2);
    }

    #[test]
    fn test_known_count() {
        // 1000 tags, every 7th is No: 143 No, 857 Yes
        for variant in available_variants() {
            let mut acc = Accumulator::new();
            assert_eq!((variant.function)(&pattern(), &mut acc), 857, "{}", variant.name);
        }
    }

    #[test]
    fn test_empty() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[], &mut Accumulator::new()), 0);
        }
    }
}

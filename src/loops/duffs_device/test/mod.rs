//! Tests for block copy implementations

use super::code::available_variants;

/// Verify every variant copies exactly, for lengths around the block size
pub fn verify_all() -> Result<(), String> {
    for len in [0usize, 1, 7, 8, 9, 15, 16, 17, 4096, 4101] {
        let src: Vec<u8> = (0..len).map(|i| (i * 37 % 251) as u8).collect();
        for variant in available_variants() {
            let mut dst = vec![0xAA; len];
            (variant.function)(&mut dst, &src);
            if dst != src {
                return Err(format!("Variant '{}' failed for len {}", variant.name, len));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loops::duffs_device::code::copy_blocks;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_registered_variants_copy_in_place() {
        use crate::input::{GeneratorConfig, InputGenerator};
        use crate::loops::duffs_device::{register, NAME, SHAPE};
        use crate::registry::VariantRegistry;
        use crate::variant::{Accumulator, Output};

        let mut registry = VariantRegistry::new();
        register(&mut registry).unwrap();
        let input = InputGenerator::new(GeneratorConfig::default())
            .unwrap()
            .generate(SHAPE, 5)
            .unwrap();
        let original = input.data().as_bytes().unwrap().to_vec();
        let half = original.len() / 2;

        for id in registry.case(NAME).unwrap().variant_names() {
            let mut data = input.data().clone();
            let out = registry.get(id).unwrap().invoke(&mut data, &mut Accumulator::new());
            assert_eq!(out, Output::Unit);
            let bytes = data.as_bytes().unwrap();
            assert_eq!(bytes.len(), original.len(), "{id}");
            assert_eq!(&bytes[..half], &original[..half], "{id}");
            assert_eq!(&bytes[half..], &original[..half], "{id}");
        }
    }

    #[test]
    fn test_other_block_sizes() {
        let src: Vec<u8> = (0..29).collect();
        let mut dst = vec![0; 29];
        copy_blocks::<4>(&mut dst, &src);
        assert_eq!(dst, src);
        let mut dst = vec![0; 29];
        copy_blocks::<16>(&mut dst, &src);
        assert_eq!(dst, src);
    }
}

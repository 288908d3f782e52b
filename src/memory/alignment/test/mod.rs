//! Tests for aligned access implementations

use super::code::available_variants;

/// Verify every variant against an iterator sum, at every starting offset
pub fn verify_all() -> Result<(), String> {
    let buffer: Vec<u8> = (0..300u32).map(|i| (i * 89 % 256) as u8).collect();
    for offset in 0..8 {
        for len in [0usize, 1, 7, 8, 9, 64, 200] {
            let bytes = &buffer[offset..offset + len];
            let expected: u64 = bytes.iter().map(|&b| b as u64).sum();
            for variant in available_variants() {
                let actual = (variant.function)(bytes);
                if actual != expected {
                    return Err(format!(
                        "Variant '{}' failed at offset {} len {}: expected {}, got {}",
                        variant.name, offset, len, expected, actual
                    ));
                }
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

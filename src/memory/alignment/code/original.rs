use std::hint::black_box;

#[inline(never)]
pub fn sum_bytewise(bytes: &[u8]) -> u64 {
    let mut sum = 0u64;
    for &b in bytes {
        sum += black_box(b) as u64;
    }
    sum
}

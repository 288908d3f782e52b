//! Word-at-a-time byte sum over the aligned middle of the buffer.

use super::sum_bytewise;

const LOW_BYTES: u64 = 0x00FF_00FF_00FF_00FF;
const LANE_ONES: u64 = 0x0001_0001_0001_0001;

/// Sum of the eight bytes packed in `word`.
#[inline(always)]
fn horizontal_byte_sum(word: u64) -> u64 {
    // Four 16-bit lanes, each at most 2 * 255
    let pairs = (word & LOW_BYTES) + ((word >> 8) & LOW_BYTES);
    // Multiplying by LANE_ONES sums all lanes into the top one
    pairs.wrapping_mul(LANE_ONES) >> 48
}

#[inline(never)]
pub fn sum_aligned_words(bytes: &[u8]) -> u64 {
    // SAFETY: every bit pattern is a valid u64
    let (head, words, tail) = unsafe { bytes.align_to::<u64>() };

    let mut sum = sum_bytewise(head);
    for &w in words {
        sum += horizontal_byte_sum(w);
    }
    sum + sum_bytewise(tail)
}

//! Hint that matches the data: `Yes` is the hot path.
//!
//! Expected layout on x86_64: test the tag, jump away on `No`, fall through
//! into the increment on `Yes`.

use super::cold_path;
use crate::input::YesNo;
use crate::variant::Accumulator;

#[inline(always)]
fn likely(b: bool) -> bool {
    if !b {
        cold_path();
    }
    b
}

/// Bump the accumulator and return true for `Yes`.
#[inline(never)]
pub fn branch_likely(tag: YesNo, acc: &mut Accumulator) -> bool {
    if likely(tag == YesNo::Yes) {
        acc.bump();
        return true;
    }
    false
}

pub fn count_likely(tags: &[YesNo], acc: &mut Accumulator) -> u64 {
    let mut count = 0;
    for &tag in tags {
        count += u64::from(branch_likely(tag, acc));
    }
    count
}

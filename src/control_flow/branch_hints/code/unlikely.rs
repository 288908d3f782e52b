//! Hint against the data: `Yes` is moved out of line.

use super::cold_path;
use crate::input::YesNo;
use crate::variant::Accumulator;

#[inline(always)]
fn unlikely(b: bool) -> bool {
    if b {
        cold_path();
    }
    b
}

/// Same contract as [`super::branch_likely`], opposite layout.
#[inline(never)]
pub fn branch_unlikely(tag: YesNo, acc: &mut Accumulator) -> bool {
    if unlikely(tag == YesNo::Yes) {
        acc.bump();
        return true;
    }
    false
}

pub fn count_unlikely(tags: &[YesNo], acc: &mut Accumulator) -> u64 {
    let mut count = 0;
    for &tag in tags {
        count += u64::from(branch_unlikely(tag, acc));
    }
    count
}

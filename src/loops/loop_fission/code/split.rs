//! Fissioned version: the hash loop is a pure dependency chain, the rewrite
//! loop has no loop-carried state and vectorizes.

use super::{mix, rewrite};

#[inline(never)]
pub fn hash_and_rewrite_split(values: &mut [i32]) -> i64 {
    let hash = values.iter().fold(0i64, |h, &v| mix(h, v));
    for v in values.iter_mut() {
        *v = rewrite(*v);
    }
    hash
}

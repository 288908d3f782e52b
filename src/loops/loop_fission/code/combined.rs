use super::{mix, rewrite};

#[inline(never)]
pub fn hash_and_rewrite_combined(values: &mut [i32]) -> i64 {
    let mut hash = 0i64;
    for v in values.iter_mut() {
        hash = mix(hash, *v);
        *v = rewrite(*v);
    }
    hash
}

#[inline(never)]
pub fn increment_column_major(dim: usize, cells: &mut [i32]) {
    for j in 0..dim {
        for i in 0..dim {
            let idx = i * dim + j;
            cells[idx] = cells[idx].wrapping_add(1);
        }
    }
}

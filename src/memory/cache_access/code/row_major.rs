#[inline(never)]
pub fn increment_row_major(dim: usize, cells: &mut [i32]) {
    for i in 0..dim {
        for j in 0..dim {
            let idx = i * dim + j;
            cells[idx] = cells[idx].wrapping_add(1);
        }
    }
}

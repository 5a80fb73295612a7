use ndarray::ArrayViewMut1;

/// Boundary repair: clamp every coordinate into `[0, area_size]`.
pub(crate) fn clip_inplace(mut x: ArrayViewMut1<f64>, area_size: f64) {
    for d in 0..x.len() {
        if x[d] < 0.0 {
            x[d] = 0.0;
        }
        if x[d] > area_size {
            x[d] = area_size;
        }
    }
}

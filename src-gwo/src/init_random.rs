use ndarray::Array2;
use rand::Rng;

/// Uniform random population over the `[0, area_size]` square, one
/// candidate per row.
pub(crate) fn init_random<R: Rng + ?Sized>(
    npop: usize,
    n: usize,
    area_size: f64,
    rng: &mut R,
) -> Array2<f64> {
    let mut pop = Array2::<f64>::zeros((npop, n));
    for i in 0..npop {
        for d in 0..n {
            pop[[i, d]] = rng.random_range(0.0..area_size);
        }
    }
    pop
}

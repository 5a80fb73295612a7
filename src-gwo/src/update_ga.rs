use ndarray::ArrayViewMut1;
use rand::Rng;

use crate::rank::Leaders;

/// GA replacement for one weaker-half candidate.
///
/// Per dimension: arithmetic crossover of the alpha and beta coordinates
/// under a fresh uniform weight, then with probability `mutation_rate` a
/// full reset of that single dimension to a uniform draw over the area
/// (a reset, not a perturbation).
pub(crate) fn ga_update<R: Rng + ?Sized>(
    mut x: ArrayViewMut1<f64>,
    leaders: &Leaders,
    mutation_rate: f64,
    area_size: f64,
    rng: &mut R,
) {
    for d in 0..x.len() {
        let w = rng.random::<f64>();
        let mut gene = w * leaders.alpha[d] + (1.0 - w) * leaders.beta[d];
        if rng.random::<f64>() < mutation_rate {
            gene = rng.random_range(0.0..area_size);
        }
        x[d] = gene;
    }
}

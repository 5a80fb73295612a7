use ndarray::ArrayViewMut1;
use rand::Rng;

use crate::rank::Leaders;

/// GWO position update for one fitter-half candidate.
///
/// Every dimension takes three independent pulls toward alpha, beta and
/// delta, each with fresh `r1`/`r2` draws, and lands on their arithmetic
/// mean. The candidate's own coordinate is read before it is overwritten.
pub(crate) fn gwo_update<R: Rng + ?Sized>(
    mut x: ArrayViewMut1<f64>,
    leaders: &Leaders,
    a: f64,
    rng: &mut R,
) {
    for d in 0..x.len() {
        let x1 = pull(leaders.alpha[d], x[d], a, rng);
        let x2 = pull(leaders.beta[d], x[d], a, rng);
        let x3 = pull(leaders.delta[d], x[d], a, rng);
        x[d] = (x1 + x2 + x3) / 3.0;
    }
}

/// One pull toward a leader coordinate: `X = leader - A * |C * leader - x|`
/// with `A = 2*a*r1 - a` and `C = 2*r2`.
fn pull<R: Rng + ?Sized>(leader_d: f64, x_d: f64, a: f64, rng: &mut R) -> f64 {
    let r1 = rng.random::<f64>();
    let r2 = rng.random::<f64>();
    let big_a = 2.0 * a * r1 - a;
    let big_c = 2.0 * r2;
    let dist = (big_c * leader_d - x_d).abs();
    leader_d - big_a * dist
}

use std::cmp::Ordering;

use ndarray::{Array1, Array2};

/// Index permutation of the population sorted ascending by fitness.
///
/// Stable on ties. Incomparable values (which the clamped arithmetic of
/// the update engine never produces) compare as equal instead of
/// panicking.
pub fn rank_ascending(fitness: &Array1<f64>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&i, &j| fitness[i].partial_cmp(&fitness[j]).unwrap_or(Ordering::Equal));
    order
}

/// The three lowest-fitness candidates of a ranked population snapshot.
///
/// Positions are owned value copies: in-place population updates later in
/// the same generation must not move a leader. Callers guarantee at least
/// three candidates (enforced by config validation).
#[derive(Debug, Clone)]
pub struct Leaders {
    pub alpha: Array1<f64>,
    pub beta: Array1<f64>,
    pub delta: Array1<f64>,
    pub alpha_fitness: f64,
    pub beta_fitness: f64,
    pub delta_fitness: f64,
}

impl Leaders {
    /// Snapshot alpha/beta/delta from a population and its ascending ranking.
    pub fn select(pop: &Array2<f64>, fitness: &Array1<f64>, order: &[usize]) -> Self {
        Self {
            alpha: pop.row(order[0]).to_owned(),
            beta: pop.row(order[1]).to_owned(),
            delta: pop.row(order[2]).to_owned(),
            alpha_fitness: fitness[order[0]],
            beta_fitness: fitness[order[1]],
            delta_fitness: fitness[order[2]],
        }
    }
}

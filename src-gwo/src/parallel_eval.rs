use ndarray::{Array1, Array2};
use rayon::prelude::*;

/// Parallel fitness evaluation settings.
///
/// Candidate evaluation is embarrassingly parallel: every candidate is
/// scored against the same frozen positions and the driver re-ranks only
/// after the whole population is evaluated, so the sequential generation
/// boundary of the algorithm is preserved either way.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Evaluate candidates with rayon instead of a serial loop
    pub enabled: bool,
    /// Worker threads for the global rayon pool; `None` keeps rayon's default
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { enabled: false, num_threads: None }
    }
}

/// Evaluate every candidate of the population, one fitness per row.
pub(crate) fn evaluate_population<F>(
    pop: &Array2<f64>,
    func: &F,
    config: &ParallelConfig,
) -> Array1<f64>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    if config.enabled {
        if let Some(n) = config.num_threads {
            // Ignore the error if the global pool is already set
            let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
        }
        let values: Vec<f64> = (0..pop.nrows())
            .into_par_iter()
            .map(|i| func(&pop.row(i).to_owned()))
            .collect();
        Array1::from(values)
    } else {
        let mut values = Array1::<f64>::zeros(pop.nrows());
        for i in 0..pop.nrows() {
            values[i] = func(&pop.row(i).to_owned());
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_serial_and_parallel_agree() {
        let pop = array![[1.0, 2.0], [3.0, 4.0], [0.0, 0.0]];
        let sum_sq = |x: &Array1<f64>| -> f64 { x.iter().map(|&v| v * v).sum() };
        let serial = evaluate_population(&pop, &sum_sq, &ParallelConfig::default());
        let parallel = evaluate_population(
            &pop,
            &sum_sq,
            &ParallelConfig { enabled: true, num_threads: None },
        );
        assert_eq!(serial, parallel);
        assert_eq!(serial, array![5.0, 25.0, 0.0]);
    }
}

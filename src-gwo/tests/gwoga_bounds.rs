use rand::SeedableRng;
use rand::rngs::StdRng;
use wsnopt_gwo::{GwoGaConfigBuilder, hybrid_gwo_ga};
use wsnopt_net::{generate_nodes, placement_fitness};

#[test]
fn test_final_population_stays_in_area() {
    let mut rng = StdRng::seed_from_u64(21);
    let nodes = generate_nodes(50, 80.0, &mut rng);
    let fitness = |x: &ndarray::Array1<f64>| placement_fitness(&nodes, x);

    let cfg = GwoGaConfigBuilder::new()
        .cluster_count(4)
        .wolf_count(24)
        .max_iterations(60)
        .area_size(80.0)
        .mutation_rate(0.15)
        .seed(21)
        .build();
    let report = hybrid_gwo_ga(&fitness, cfg).unwrap();

    for &v in report.population.iter() {
        assert!((0.0..=80.0).contains(&v), "coordinate {} escaped the area", v);
    }
    for &v in report.x.iter() {
        assert!((0.0..=80.0).contains(&v));
    }
}

#[test]
fn test_history_and_counters_are_complete() {
    let mut rng = StdRng::seed_from_u64(13);
    let nodes = generate_nodes(25, 100.0, &mut rng);
    let fitness = |x: &ndarray::Array1<f64>| placement_fitness(&nodes, x);

    let cfg = GwoGaConfigBuilder::new()
        .cluster_count(2)
        .wolf_count(15)
        .max_iterations(35)
        .seed(13)
        .build();
    let report = hybrid_gwo_ga(&fitness, cfg).unwrap();

    assert_eq!(report.convergence.len(), 35);
    assert!(report.convergence.iter().all(|f| f.is_finite()));
    // One full evaluation at init plus one per generation
    assert_eq!(report.nfev, 15 * 36);
}

#[test]
fn test_report_fitness_matches_positions() {
    // Outside an in-progress update the cached fitness must equal the
    // evaluator applied to the position, for the best candidate and for
    // the whole final population.
    let mut rng = StdRng::seed_from_u64(29);
    let nodes = generate_nodes(20, 100.0, &mut rng);
    let fitness = |x: &ndarray::Array1<f64>| placement_fitness(&nodes, x);

    let cfg = GwoGaConfigBuilder::new()
        .cluster_count(3)
        .wolf_count(12)
        .max_iterations(20)
        .seed(29)
        .build();
    let report = hybrid_gwo_ga(&fitness, cfg).unwrap();

    assert_eq!(report.fun, placement_fitness(&nodes, &report.x));
    for i in 0..report.population.nrows() {
        let row = report.population.row(i).to_owned();
        assert_eq!(report.population_fitness[i], placement_fitness(&nodes, &row));
    }
}

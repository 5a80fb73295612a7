//! Shared pipeline steps used by the binaries
//!
//! One run: generate a random deployment, optimize cluster-head placement,
//! write the result files. A failed output step is reported and skipped;
//! the remaining steps are still attempted.

use std::path::{Path, PathBuf};

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::outputs::{self, OutputError};
use wsnopt_gwo::{ConfigError, GwoGaConfigBuilder, GwoGaReport, HybridGwoGa};
use wsnopt_net::{Node, generate_nodes, placement_fitness};

/// Deployment and optimizer constants for one pipeline run.
///
/// The defaults reproduce the reference scenario: 100 nodes and 5 cluster
/// heads on a 100 x 100 area, 20 wolves for 50 generations, seed 42.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub node_count: usize,
    pub cluster_count: usize,
    pub wolf_count: usize,
    pub max_iterations: usize,
    pub area_size: f64,
    pub mutation_rate: f64,
    pub seed: u64,
    pub disp: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            node_count: 100,
            cluster_count: 5,
            wolf_count: 20,
            max_iterations: 50,
            area_size: 100.0,
            mutation_rate: 0.1,
            seed: 42,
            disp: true,
        }
    }
}

/// What a pipeline run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// The generated deployment, unchanged by the optimization
    pub nodes: Vec<Node>,
    /// Best candidate, convergence history and final population
    pub report: GwoGaReport,
    /// Result files that were written
    pub written: Vec<PathBuf>,
    /// Output steps that failed and were skipped, with the error text
    pub failed: Vec<(String, String)>,
}

/// Run the full pipeline into `out_dir`.
///
/// Only a malformed configuration aborts the run; output failures are
/// reported per step in the returned outcome.
pub fn run_placement(config: &RunConfig, out_dir: &Path) -> Result<RunOutcome, ConfigError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let nodes = generate_nodes(config.node_count, config.area_size, &mut rng);

    let fitness = |position: &Array1<f64>| placement_fitness(&nodes, position);
    let gwo_config = GwoGaConfigBuilder::new()
        .cluster_count(config.cluster_count)
        .wolf_count(config.wolf_count)
        .max_iterations(config.max_iterations)
        .area_size(config.area_size)
        .mutation_rate(config.mutation_rate)
        .seed(config.seed)
        .disp(config.disp)
        .build();
    let report = HybridGwoGa::new(&fitness, gwo_config).solve()?;

    let mut written = Vec::new();
    let mut failed = Vec::new();
    let mut record = |step: &str, result: Result<PathBuf, OutputError>| match result {
        Ok(path) => written.push(path),
        Err(e) => {
            eprintln!("skipping {} output: {}", step, e);
            failed.push((step.to_string(), e.to_string()));
        }
    };

    record("nodes", outputs::write_nodes(out_dir, &nodes));
    record("cluster heads", outputs::write_cluster_heads(out_dir, &report.x));
    record("convergence", outputs::write_convergence(out_dir, &report.convergence));
    record("summary", outputs::write_summary(out_dir, config, &report));

    Ok(RunOutcome { nodes, report, written, failed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::{SUMMARY_FILE, read_convergence, read_nodes};

    fn small_config() -> RunConfig {
        RunConfig {
            node_count: 12,
            cluster_count: 2,
            wolf_count: 8,
            max_iterations: 10,
            area_size: 100.0,
            mutation_rate: 0.1,
            seed: 7,
            disp: false,
        }
    }

    #[test]
    fn test_pipeline_writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = run_placement(&small_config(), dir.path()).unwrap();

        assert!(outcome.failed.is_empty(), "failed steps: {:?}", outcome.failed);
        assert_eq!(outcome.written.len(), 4);

        let nodes = read_nodes(&dir.path().join(crate::outputs::NODES_FILE)).unwrap();
        assert_eq!(nodes.len(), 12);
        assert_eq!(nodes, outcome.nodes);

        let records =
            read_convergence(&dir.path().join(crate::outputs::CONVERGENCE_FILE)).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].generation, 1);

        let file = std::fs::File::open(dir.path().join(SUMMARY_FILE)).unwrap();
        let summary: crate::outputs::RunSummary = serde_json::from_reader(file).unwrap();
        assert_eq!(summary.node_count, 12);
        assert_eq!(summary.seed, 7);
        assert_eq!(summary.best_fitness, outcome.report.fun);
    }

    #[test]
    fn test_unwritable_outputs_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let outcome = run_placement(&small_config(), &missing).unwrap();

        assert!(outcome.written.is_empty());
        assert_eq!(outcome.failed.len(), 4);
        // The optimization itself still completed
        assert_eq!(outcome.report.convergence.len(), 10);
    }

    #[test]
    fn test_same_seed_gives_identical_outcome() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let first = run_placement(&small_config(), dir_a.path()).unwrap();
        let second = run_placement(&small_config(), dir_b.path()).unwrap();

        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.report.x, second.report.x);
        assert_eq!(first.report.convergence, second.report.convergence);
    }

    #[test]
    fn test_malformed_configuration_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config();
        config.wolf_count = 2;
        assert!(run_placement(&config, dir.path()).is_err());
    }
}

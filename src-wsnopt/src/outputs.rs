//! Result-file writers and readers
//!
//! Every writer creates one file under the output directory and returns
//! the path it wrote; failures carry the target path so the pipeline can
//! report the step and skip it. The readers are the inverse, used by the
//! plotting binary.

use std::fs::File;
use std::path::{Path, PathBuf};

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::run::RunConfig;
use wsnopt_gwo::GwoGaReport;
use wsnopt_net::{Node, heads};

/// Sensor-node coordinates, one row per node
pub const NODES_FILE: &str = "nodes.csv";
/// Optimized cluster-head coordinates from the best candidate
pub const CLUSTER_HEADS_FILE: &str = "cluster_heads.csv";
/// Best fitness per generation, 1-indexed for display
pub const CONVERGENCE_FILE: &str = "convergence.csv";
/// Run configuration and final result
pub const SUMMARY_FILE: &str = "run_summary.json";

/// Error accessing one result file
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to access {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One convergence row; `generation` is 1-indexed for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceRecord {
    pub generation: usize,
    pub best_fitness: f64,
}

/// Run configuration and final result, serialized as the run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub node_count: usize,
    pub cluster_count: usize,
    pub wolf_count: usize,
    pub max_iterations: usize,
    pub area_size: f64,
    pub mutation_rate: f64,
    pub seed: u64,
    pub best_fitness: f64,
    pub evaluations: usize,
}

/// Write the sensor-node coordinates.
pub fn write_nodes(out_dir: &Path, nodes: &[Node]) -> Result<PathBuf, OutputError> {
    let path = out_dir.join(NODES_FILE);
    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| OutputError::Csv { path: path.clone(), source: e })?;
    for node in nodes {
        writer
            .serialize(node)
            .map_err(|e| OutputError::Csv { path: path.clone(), source: e })?;
    }
    writer
        .flush()
        .map_err(|e| OutputError::Io { path: path.clone(), source: e })?;
    Ok(path)
}

/// Write the cluster-head coordinates encoded in the best candidate, in
/// encoding order.
pub fn write_cluster_heads(out_dir: &Path, position: &Array1<f64>) -> Result<PathBuf, OutputError> {
    let path = out_dir.join(CLUSTER_HEADS_FILE);
    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| OutputError::Csv { path: path.clone(), source: e })?;
    for head in heads(position) {
        writer
            .serialize(head)
            .map_err(|e| OutputError::Csv { path: path.clone(), source: e })?;
    }
    writer
        .flush()
        .map_err(|e| OutputError::Io { path: path.clone(), source: e })?;
    Ok(path)
}

/// Write the convergence history in generation order.
pub fn write_convergence(out_dir: &Path, history: &[f64]) -> Result<PathBuf, OutputError> {
    let path = out_dir.join(CONVERGENCE_FILE);
    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| OutputError::Csv { path: path.clone(), source: e })?;
    for (t, &best_fitness) in history.iter().enumerate() {
        writer
            .serialize(ConvergenceRecord { generation: t + 1, best_fitness })
            .map_err(|e| OutputError::Csv { path: path.clone(), source: e })?;
    }
    writer
        .flush()
        .map_err(|e| OutputError::Io { path: path.clone(), source: e })?;
    Ok(path)
}

/// Write the run summary: configuration, final fitness, evaluation count.
pub fn write_summary(
    out_dir: &Path,
    config: &RunConfig,
    report: &GwoGaReport,
) -> Result<PathBuf, OutputError> {
    let path = out_dir.join(SUMMARY_FILE);
    let summary = RunSummary {
        node_count: config.node_count,
        cluster_count: config.cluster_count,
        wolf_count: config.wolf_count,
        max_iterations: config.max_iterations,
        area_size: config.area_size,
        mutation_rate: config.mutation_rate,
        seed: config.seed,
        best_fitness: report.fun,
        evaluations: report.nfev,
    };
    let file = File::create(&path).map_err(|e| OutputError::Io { path: path.clone(), source: e })?;
    serde_json::to_writer_pretty(file, &summary)
        .map_err(|e| OutputError::Json { path: path.clone(), source: e })?;
    Ok(path)
}

/// Read a coordinate file (nodes or cluster heads) back.
pub fn read_nodes(path: &Path) -> Result<Vec<Node>, OutputError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| OutputError::Csv { path: path.to_path_buf(), source: e })?;
    let mut nodes = Vec::new();
    for record in reader.deserialize() {
        nodes.push(record.map_err(|e| OutputError::Csv { path: path.to_path_buf(), source: e })?);
    }
    Ok(nodes)
}

/// Read the cluster-head file back.
pub fn read_cluster_heads(path: &Path) -> Result<Vec<Node>, OutputError> {
    read_nodes(path)
}

/// Read the convergence history back.
pub fn read_convergence(path: &Path) -> Result<Vec<ConvergenceRecord>, OutputError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| OutputError::Csv { path: path.to_path_buf(), source: e })?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record.map_err(|e| OutputError::Csv { path: path.to_path_buf(), source: e })?);
    }
    Ok(records)
}

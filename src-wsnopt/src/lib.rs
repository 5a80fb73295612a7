//! WSN cluster-head placement pipeline
//!
//! Ties the deployment model and the hybrid GWO-GA optimizer together:
//! generate a random deployment, optimize cluster-head placement, write
//! the result files, render plots. The heavy lifting lives in the
//! companion crates:
//!
//! - `wsnopt_net`: deployment-area model and placement objective
//! - `wsnopt_gwo`: hybrid GWO-GA optimizer

// Re-export companion crate functionality
pub use wsnopt_gwo as gwo;
pub use wsnopt_net as net;

/// Output directory resolution
pub mod env_utils;
/// Result-file writers and readers
pub mod outputs;
/// Plotting and visualization
pub mod plot;
/// Shared pipeline steps used by the binaries
pub mod run;

pub use run::{RunConfig, RunOutcome, run_placement};

//! Parameterless pipeline entry point: generate a deployment, optimize
//! cluster-head placement, write the result files.
//!
//! All run parameters are the compile-time defaults of `RunConfig`; the
//! output directory comes from `WSNOPT_DIR` (falling back to the working
//! directory). Run `plot_wsnopt` afterwards to visualize the results.

use std::process;

use wsnopt::env_utils::get_data_generated_dir;
use wsnopt::net::heads;
use wsnopt::run::{RunConfig, run_placement};

fn main() {
    let out_dir = match get_data_generated_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("output directory error: {}", e);
            process::exit(1);
        }
    };

    let config = RunConfig::default();
    match run_placement(&config, &out_dir) {
        Ok(outcome) => {
            println!("best fitness: {:.4}", outcome.report.fun);
            for (k, head) in heads(&outcome.report.x).iter().enumerate() {
                println!("cluster head {}: ({:.4}, {:.4})", k + 1, head.x, head.y);
            }
            for path in &outcome.written {
                println!("wrote {}", path.display());
            }
            if !outcome.failed.is_empty() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            process::exit(1);
        }
    }
}

//! Render the clustering scatter and the convergence curve from a
//! previous run's result files.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use ndarray::Array1;

use wsnopt::env_utils::get_data_generated_dir;
use wsnopt::outputs::{
    CLUSTER_HEADS_FILE, CONVERGENCE_FILE, NODES_FILE, read_cluster_heads, read_convergence,
    read_nodes,
};
use wsnopt::plot::{plot_clusters, plot_convergence, render_page};

/// CLI arguments for plotting placement results
#[derive(Parser, Debug)]
#[command(name = "plot_wsnopt")]
#[command(about = "Plot WSN clustering results and convergence with Plotly")]
struct Args {
    /// Directory containing the result files of a previous run
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Output HTML file; defaults to wsnopt.html inside the data directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Deployment-area side length used for the axis ranges
    #[arg(long, default_value_t = 100.0)]
    area_size: f64,
}

fn main() {
    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| match get_data_generated_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error accessing data directory: {}", e);
            process::exit(1);
        }
    });

    let nodes = match read_nodes(&data_dir.join(NODES_FILE)) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("{} (run run_wsnopt first)", e);
            process::exit(1);
        }
    };
    let head_points = match read_cluster_heads(&data_dir.join(CLUSTER_HEADS_FILE)) {
        Ok(head_points) => head_points,
        Err(e) => {
            eprintln!("{} (run run_wsnopt first)", e);
            process::exit(1);
        }
    };
    let history = match read_convergence(&data_dir.join(CONVERGENCE_FILE)) {
        Ok(history) => history,
        Err(e) => {
            eprintln!("{} (run run_wsnopt first)", e);
            process::exit(1);
        }
    };

    // Re-interleave the heads into a position vector for cluster assignment
    let mut coords = Vec::with_capacity(2 * head_points.len());
    for head in &head_points {
        coords.push(head.x);
        coords.push(head.y);
    }
    let position = Array1::from(coords);

    let clusters = plot_clusters(&nodes, &position, args.area_size);
    let curve: Vec<(usize, f64)> =
        history.iter().map(|r| (r.generation, r.best_fitness)).collect();
    let convergence = plot_convergence(&curve);
    let html = render_page(&clusters, &convergence);

    let output = args.output.unwrap_or_else(|| data_dir.join("wsnopt.html"));
    if let Err(e) = fs::write(&output, html) {
        eprintln!("failed to write {}: {}", output.display(), e);
        process::exit(1);
    }
    println!("created {}", output.display());
}

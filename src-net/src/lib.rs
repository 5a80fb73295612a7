//! Deployment-area model for WSN cluster-head placement
//!
//! Provides the sensor-node representation, uniform node generation over a
//! square deployment area, and the placement objective the optimizer
//! minimizes: the sum over all nodes of the Euclidean distance to the
//! nearest cluster head.
//!
//! Candidate positions are flat `Array1<f64>` vectors interleaving the
//! head coordinates as `(x1, y1, x2, y2, ...)`, one pair per cluster head.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use wsnopt_net::{placement_fitness, Node};
//!
//! let nodes = vec![Node::new(0.0, 0.0)];
//! let position = Array1::from(vec![3.0, 4.0]);
//! assert_eq!(placement_fitness(&nodes, &position), 5.0);
//! ```

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A sensor node in the deployment area.
///
/// Generated once per run, read-only for the remainder of the execution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
///
/// Symmetric, non-negative, zero iff the points coincide.
pub fn euclidean(a: Node, b: Node) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Generate `count` nodes uniformly over the `[0, area_size]` square.
pub fn generate_nodes<R: Rng + ?Sized>(count: usize, area_size: f64, rng: &mut R) -> Vec<Node> {
    (0..count)
        .map(|_| Node {
            x: rng.random_range(0.0..area_size),
            y: rng.random_range(0.0..area_size),
        })
        .collect()
}

/// Number of coordinates a candidate needs to encode `cluster_count` heads.
pub fn dimension(cluster_count: usize) -> usize {
    2 * cluster_count
}

/// Per-dimension `[0, area_size]` bounds for `cluster_count` heads.
pub fn uniform_bounds(cluster_count: usize, area_size: f64) -> Vec<(f64, f64)> {
    vec![(0.0, area_size); dimension(cluster_count)]
}

/// Decode the cluster-head points from an interleaved position vector.
pub fn heads(position: &Array1<f64>) -> Vec<Node> {
    (0..position.len() / 2)
        .map(|k| Node::new(position[2 * k], position[2 * k + 1]))
        .collect()
}

/// Index of the cluster head in `position` closest to `node`.
///
/// Ties resolve to the lowest head index. `position` must encode at least
/// one head.
pub fn nearest_head(node: Node, position: &Array1<f64>) -> usize {
    let mut best_k = 0usize;
    let mut best_d = f64::INFINITY;
    for k in 0..position.len() / 2 {
        let head = Node::new(position[2 * k], position[2 * k + 1]);
        let d = euclidean(node, head);
        if d < best_d {
            best_d = d;
            best_k = k;
        }
    }
    best_k
}

/// Placement objective: total distance from every node to its nearest
/// cluster head. Lower is better.
///
/// Duplicate or coincident head coordinates are allowed; the sum simply
/// reflects the resulting coverage quality. No penalty or normalization
/// is applied to degenerate configurations.
pub fn placement_fitness(nodes: &[Node], position: &Array1<f64>) -> f64 {
    let head_count = position.len() / 2;
    let mut total = 0.0;
    for node in nodes {
        let mut min_d = f64::INFINITY;
        for k in 0..head_count {
            let head = Node::new(position[2 * k], position[2 * k + 1]);
            let d = euclidean(*node, head);
            if d < min_d {
                min_d = d;
            }
        }
        total += min_d;
    }
    total
}

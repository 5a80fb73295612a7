//! Plotting and visualization for placement results
//!
//! Builds a clustering scatter (nodes colored by the head they attach to,
//! heads drawn as stars) and a convergence curve, composed into one
//! standalone HTML page.

use build_html::*;
use ndarray::Array1;
use plotly::common::{Line, Marker, MarkerSymbol, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use wsnopt_net::{Node, heads, nearest_head};

/// Rotating color palette, one color per cluster
const CLUSTER_COLORS: [&str; 7] = ["red", "green", "blue", "orange", "purple", "cyan", "magenta"];

/// Scatter of the deployment: one trace per cluster plus the head markers.
pub fn plot_clusters(nodes: &[Node], position: &Array1<f64>, area_size: f64) -> Plot {
    let head_points = heads(position);
    let mut plot = Plot::new();

    for k in 0..head_points.len() {
        let members: Vec<Node> = nodes
            .iter()
            .copied()
            .filter(|&node| nearest_head(node, position) == k)
            .collect();
        let xs: Vec<f64> = members.iter().map(|n| n.x).collect();
        let ys: Vec<f64> = members.iter().map(|n| n.y).collect();
        let trace = Scatter::new(xs, ys)
            .mode(Mode::Markers)
            .name(format!("cluster {}", k + 1))
            .marker(
                Marker::new()
                    .color(CLUSTER_COLORS[k % CLUSTER_COLORS.len()])
                    .size(7),
            );
        plot.add_trace(trace);
    }

    let head_xs: Vec<f64> = head_points.iter().map(|n| n.x).collect();
    let head_ys: Vec<f64> = head_points.iter().map(|n| n.y).collect();
    let head_trace = Scatter::new(head_xs, head_ys)
        .mode(Mode::Markers)
        .name("cluster heads")
        .marker(
            Marker::new()
                .color("black")
                .size(14)
                .symbol(MarkerSymbol::Star),
        );
    plot.add_trace(head_trace);

    let layout = Layout::new()
        .title(Title::with_text("WSN clustering"))
        .x_axis(
            Axis::new()
                .title(Title::with_text("x (m)"))
                .range(vec![0.0, area_size]),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("y (m)"))
                .range(vec![0.0, area_size]),
        );
    plot.set_layout(layout);
    plot
}

/// Convergence curve: best fitness going into each generation.
pub fn plot_convergence(history: &[(usize, f64)]) -> Plot {
    let generations: Vec<usize> = history.iter().map(|&(g, _)| g).collect();
    let best: Vec<f64> = history.iter().map(|&(_, f)| f).collect();

    let trace = Scatter::new(generations, best)
        .mode(Mode::Lines)
        .name("best fitness")
        .line(Line::new().color("rgba(200, 30, 30, 0.9)").width(2.5));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Convergence curve"))
            .x_axis(Axis::new().title(Title::with_text("Generation")))
            .y_axis(Axis::new().title(Title::with_text("Total distance (fitness)"))),
    );
    plot
}

/// Compose both plots into one standalone HTML page.
pub fn render_page(clusters: &Plot, convergence: &Plot) -> String {
    HtmlPage::new()
        .with_title("WSN cluster-head placement")
        .with_script_link("https://cdn.plot.ly/plotly-latest.min.js")
        .with_raw(clusters.to_inline_html(Some("clusters")))
        .with_raw(convergence.to_inline_html(Some("convergence")))
        .to_html_string()
}

use rand::Rng;

use crate::problem::graph::{Edge, Graph};
use crate::utils::Random;

const MAX_WEIGHT: u64 = 100;

/// Generate a pseudo-random connected graph: a spanning-tree skeleton (every
/// vertex after the first attaches to a random earlier one) plus additional
/// random edges up to `num_edges`. Weights are drawn from 1..=100.
///
/// Deterministic for a given rng state, so generated benchmark instances are
/// reproducible from the seed alone.
pub fn random_connected_graph(
    id: u32,
    num_vertices: usize,
    num_edges: usize,
    rng: &mut Random,
) -> Graph {
    let nodes: Vec<String> = (0..num_vertices).map(|it| format!("V{}", it)).collect();

    let mut edges = Vec::with_capacity(num_edges.max(num_vertices.saturating_sub(1)));
    for i in 1..num_vertices {
        let j = rng.gen_range(0..i);
        edges.push(Edge::new(
            nodes[j].clone(),
            nodes[i].clone(),
            rng.gen_range(1..=MAX_WEIGHT),
        ));
    }

    while edges.len() < num_edges && num_vertices >= 2 {
        let a = rng.gen_range(0..num_vertices);
        let b = rng.gen_range(0..num_vertices);
        if a == b {
            continue;
        }
        edges.push(Edge::new(
            nodes[a].clone(),
            nodes[b].clone(),
            rng.gen_range(1..=MAX_WEIGHT),
        ));
    }

    Graph { id, nodes, edges }
}

//! Kruskal's algorithm: sort the edges ascending by weight and greedily
//! accept every edge whose endpoints are still in different union-find sets.

use std::time::Instant;

use crate::mst::disjoint_set::DisjointSet;
use crate::mst::KruskalResult;
use crate::problem::graph::{Edge, Graph};

/// Compute the minimum spanning tree (or forest, if `graph` is
/// disconnected) with Kruskal's algorithm.
///
/// Equal-weight edges keep their input order (stable sort), so tie-breaking
/// is reproducible for a fixed instance. Edges with endpoints outside the
/// vertex list are counted as considered but skipped. The reported time
/// spans the whole computation including the sort.
pub fn compute_mst(graph: &Graph) -> KruskalResult {
    let mut result = KruskalResult::default();
    if graph.nodes.is_empty() {
        return result;
    }
    let start = Instant::now();

    let mut dsu = DisjointSet::new();
    for v in &graph.nodes {
        dsu.make_set(v);
    }

    let mut edges: Vec<&Edge> = graph.edges.iter().collect();
    edges.sort_by_key(|it| it.weight);

    for edge in edges {
        result.edge_comparisons += 1;

        let (ru, rv) = match (dsu.find(&edge.from), dsu.find(&edge.to)) {
            (Some(ru), Some(rv)) => (ru, rv),
            // unknown endpoint: skip rather than fail
            _ => continue,
        };

        // different roots: the edge cannot close a cycle
        if ru != rv {
            dsu.union(&edge.from, &edge.to);
            result.mst_edges.push(edge.clone());
            result.total_cost += edge.weight;
        }

        // a spanning tree is complete at |V|-1 edges
        if result.mst_edges.len() == graph.num_vertices() - 1 {
            break;
        }
    }

    result.dsu_finds = dsu.find_count();
    result.dsu_unions = dsu.union_count();
    result.execution_time_ms = start.elapsed().as_secs_f64() * 1_000.0;
    result
}

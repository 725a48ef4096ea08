use log::info;
use serde::Serialize;
use took::Timer;

use crate::mst::{kruskal, prim, KruskalResult, PrimResult};
use crate::problem::graph::Graph;

#[derive(Serialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

/// Side-by-side record of both algorithms on one graph; serializes into the
/// per-graph entry of the report file.
#[derive(Serialize)]
pub struct GraphComparison {
    pub graph_id: u32,
    pub input_stats: InputStats,
    pub prim: PrimResult,
    pub kruskal: KruskalResult,
}

/// Run Prim's and Kruskal's algorithm on the same graph and collect the
/// comparison record. The graph is shared read-only; each run owns its
/// working state exclusively.
pub fn run_comparison(graph: &Graph) -> GraphComparison {
    let timer = Timer::new();

    let prim_result = prim::compute_mst(graph);
    let kruskal_result = kruskal::compute_mst(graph);

    #[cfg(feature = "result_assertions")]
    {
        use crate::utils::validator::validate_tree;
        validate_tree(graph, &prim_result.mst_edges, prim_result.total_cost).assert_valid();
        validate_tree(graph, &kruskal_result.mst_edges, kruskal_result.total_cost).assert_valid();
    }

    info!(
        "graph {}: prim cost = {} ({:.3} ms) | kruskal cost = {} ({:.3} ms) | took: {}",
        graph.id,
        prim_result.total_cost,
        prim_result.execution_time_ms,
        kruskal_result.total_cost,
        kruskal_result.execution_time_ms,
        timer.took(),
    );

    GraphComparison {
        graph_id: graph.id,
        input_stats: InputStats {
            vertices: graph.num_vertices(),
            edges: graph.num_edges(),
        },
        prim: prim_result,
        kruskal: kruskal_result,
    }
}

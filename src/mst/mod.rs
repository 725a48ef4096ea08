//! The two MST algorithms and their shared result values. Both take the
//! input graph by shared reference, own all working state for the duration
//! of one call, and return a populated result; degenerate inputs (empty
//! vertex list, unknown endpoints, disconnected graphs) degrade to partial
//! results instead of errors.

use serde::Serialize;

use crate::problem::graph::Edge;
use crate::problem::Weight;

pub mod disjoint_set;
pub mod kruskal;
pub mod prim;

/// Result of one Kruskal run: selected edges in acceptance order, their
/// summed weight, and the operation counters of this invocation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct KruskalResult {
    pub mst_edges: Vec<Edge>,
    pub total_cost: Weight,
    /// edges reached by the sorted selection loop (accepted or not)
    pub edge_comparisons: u64,
    pub dsu_finds: u64,
    pub dsu_unions: u64,
    pub execution_time_ms: f64,
}

/// Result of one Prim run: selected edges in finalization order, their
/// summed weight, and the operation counters of this invocation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PrimResult {
    pub mst_edges: Vec<Edge>,
    pub total_cost: Weight,
    /// priority-queue pushes and pops, stale entries included
    pub heap_operations: u64,
    /// strict improvements of a vertex's best known connection
    pub key_updates: u64,
    /// neighbor weight comparisons during relaxation
    pub comparisons: u64,
    pub execution_time_ms: f64,
}

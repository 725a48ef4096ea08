//! Prim's algorithm with a lazy-decrease-key priority queue: improved
//! connections are pushed as fresh heap entries and superseded ones are
//! discarded when popped, so no decrease-key-capable structure is needed.
//! Every push and pop counts as one heap operation, stale entries included.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use fixedbitset::FixedBitSet;

use crate::mst::PrimResult;
use crate::problem::graph::{Edge, Graph};
use crate::problem::Weight;

const NO_PARENT: usize = usize::MAX;

/// Compute the minimum spanning tree with Prim's algorithm, grown from the
/// first vertex of the graph's vertex list. On disconnected input the tree
/// covers only the start vertex's component.
pub fn compute_mst(graph: &Graph) -> PrimResult {
    let mut result = PrimResult::default();
    if graph.nodes.is_empty() {
        return result;
    }
    let start = Instant::now();

    let adjacency = graph.adjacency();
    let n = adjacency.len();

    // dense id 0 is the first vertex of the list, our start
    let mut best_key = vec![Weight::MAX; n];
    best_key[0] = 0;

    let mut in_mst = FixedBitSet::with_capacity(n);
    let mut finalized = 0;

    // min-heap of (weight, vertex, parent); ties pop in vertex order
    let mut heap: BinaryHeap<Reverse<(Weight, usize, usize)>> = BinaryHeap::new();
    heap.push(Reverse((0, 0, NO_PARENT)));
    result.heap_operations += 1;

    while finalized < n {
        let Reverse((weight, u, parent)) = match heap.pop() {
            Some(candidate) => candidate,
            None => break, // disconnected: queue drained early
        };
        result.heap_operations += 1;

        // stale lazy-decrease-key entry, superseded by a cheaper one
        if in_mst.contains(u) {
            continue;
        }
        in_mst.insert(u);
        finalized += 1;

        if parent != NO_PARENT {
            result
                .mst_edges
                .push(Edge::new(adjacency.label(parent), adjacency.label(u), weight));
            result.total_cost += weight;
        }

        for half in adjacency.outward(u) {
            let v = half.neighbor;
            if in_mst.contains(v) {
                continue;
            }
            result.comparisons += 1;
            if half.weight < best_key[v] {
                best_key[v] = half.weight;
                heap.push(Reverse((half.weight, v, u)));
                result.heap_operations += 1;
                result.key_updates += 1;
            }
        }
    }

    result.execution_time_ms = start.elapsed().as_secs_f64() * 1_000.0;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::graph::graph_from;

    #[test]
    fn four_vertex_reference_graph() {
        let graph = graph_from(
            1,
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1),
                ("B", "C", 2),
                ("C", "D", 3),
                ("A", "D", 4),
                ("A", "C", 5),
            ],
        );

        let result = compute_mst(&graph);

        assert_eq!(result.total_cost, 6);
        assert_eq!(
            result.mst_edges,
            vec![
                Edge::new("A", "B", 1),
                Edge::new("B", "C", 2),
                Edge::new("C", "D", 3),
            ]
        );
    }

    #[test]
    fn reference_graph_operation_counts() {
        let graph = graph_from(
            1,
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1),
                ("B", "C", 2),
                ("C", "D", 3),
                ("A", "D", 4),
                ("A", "C", 5),
            ],
        );

        let result = compute_mst(&graph);

        // 1 seed push + 4 pops + 5 candidate pushes; the two stale entries
        // left in the queue are never popped because all vertices finalize
        assert_eq!(result.heap_operations, 10);
        assert_eq!(result.key_updates, 5);
        assert_eq!(result.comparisons, 5);
    }

    #[test]
    fn empty_graph_yields_empty_result() {
        let result = compute_mst(&Graph::default());

        assert!(result.mst_edges.is_empty());
        assert_eq!(result.total_cost, 0);
        assert_eq!(result.heap_operations, 0);
        assert_eq!(result.key_updates, 0);
        assert_eq!(result.comparisons, 0);
        assert_eq!(result.execution_time_ms, 0.0);
    }

    #[test]
    fn single_vertex_yields_empty_tree() {
        let graph = graph_from(1, &["A"], &[]);
        let result = compute_mst(&graph);

        assert!(result.mst_edges.is_empty());
        assert_eq!(result.total_cost, 0);
        // seed push and its pop
        assert_eq!(result.heap_operations, 2);
    }

    #[test]
    fn stale_entries_are_popped_and_discarded() {
        let graph = graph_from(
            1,
            &["A", "B", "C", "D"],
            &[("A", "B", 2), ("A", "C", 3), ("B", "C", 1), ("C", "D", 10)],
        );

        let result = compute_mst(&graph);

        assert_eq!(
            result.mst_edges,
            vec![
                Edge::new("A", "B", 2),
                Edge::new("B", "C", 1),
                Edge::new("C", "D", 10),
            ]
        );
        assert_eq!(result.total_cost, 13);
        // the superseded (3, C, A) entry is popped and skipped, and both
        // that pop and its original push are counted
        assert_eq!(result.heap_operations, 10);
    }

    #[test]
    fn disconnected_graph_covers_only_the_start_component() {
        let graph = graph_from(
            1,
            &["A", "B", "C", "X", "Y", "Z"],
            &[
                ("A", "B", 1),
                ("B", "C", 2),
                ("A", "C", 3),
                ("X", "Y", 1),
                ("Y", "Z", 2),
                ("X", "Z", 3),
            ],
        );

        let result = compute_mst(&graph);

        assert_eq!(result.mst_edges.len(), 2);
        assert_eq!(result.total_cost, 3);
        for edge in &result.mst_edges {
            assert!(["A", "B", "C"].contains(&edge.from.as_str()));
            assert!(["A", "B", "C"].contains(&edge.to.as_str()));
        }
    }

    #[test]
    fn unknown_endpoints_are_ignored() {
        let graph = graph_from(1, &["A", "B"], &[("A", "X", 1), ("A", "B", 2)]);
        let result = compute_mst(&graph);

        assert_eq!(result.mst_edges, vec![Edge::new("A", "B", 2)]);
        assert_eq!(result.total_cost, 2);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let graph = graph_from(
            1,
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1),
                ("B", "C", 2),
                ("C", "D", 3),
                ("A", "D", 4),
                ("A", "C", 5),
            ],
        );

        let first = compute_mst(&graph);
        let second = compute_mst(&graph);

        assert_eq!(first.mst_edges, second.mst_edges);
        assert_eq!(first.total_cost, second.total_cost);
        assert_eq!(first.heap_operations, second.heap_operations);
        assert_eq!(first.key_updates, second.key_updates);
        assert_eq!(first.comparisons, second.comparisons);
    }
}

use crate::mst::disjoint_set::DisjointSet;
use crate::problem::graph::{Edge, Graph};
use crate::problem::Weight;

#[derive(Debug)]
pub enum Violation {
    /// a selected edge closes a cycle over the previously selected ones
    Cycle(Edge),
    /// more selected edges than any spanning tree of the graph can have
    TooManyEdges { edges: usize, vertices: usize },
    /// stated total cost differs from the sum of the selected weights
    CostMismatch { stated: Weight, actual: Weight },
}

#[derive(Debug)]
pub enum ValidatorResult {
    Valid,
    ConstraintViolation(Violation),
}

impl ValidatorResult {
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Valid => true,
            _ => false,
        }
    }

    pub fn assert_valid(&self) {
        match self {
            Self::Valid => {}
            Self::ConstraintViolation(violation) => {
                assert!(false, "{:?}", violation)
            }
        }
    }
}

/// Structural check of an MST result against its input graph: edge count
/// bound, acyclicity of the selected edge set, and cost accounting.
pub fn validate_tree(graph: &Graph, mst_edges: &[Edge], total_cost: Weight) -> ValidatorResult {
    if graph.num_vertices() > 0 && mst_edges.len() > graph.num_vertices() - 1 {
        return ValidatorResult::ConstraintViolation(Violation::TooManyEdges {
            edges: mst_edges.len(),
            vertices: graph.num_vertices(),
        });
    }

    let mut dsu = DisjointSet::new();
    for v in &graph.nodes {
        dsu.make_set(v);
    }
    let mut actual = 0;
    for edge in mst_edges {
        if dsu.find(&edge.from) == dsu.find(&edge.to) {
            return ValidatorResult::ConstraintViolation(Violation::Cycle(edge.clone()));
        }
        dsu.union(&edge.from, &edge.to);
        actual += edge.weight;
    }

    if actual != total_cost {
        return ValidatorResult::ConstraintViolation(Violation::CostMismatch {
            stated: total_cost,
            actual,
        });
    }

    ValidatorResult::Valid
}

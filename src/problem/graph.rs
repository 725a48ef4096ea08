use std::fmt;

use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::problem::Weight;

/// Undirected weighted edge between two labeled vertices. Parallel edges are
/// permitted and treated independently.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.from, self.to, self.weight)
    }
}

/// Passive input graph as it appears in the instance file. The vertex list
/// order is significant: it fixes Prim's start vertex and the dense ids of
/// the adjacency index.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Graph {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn num_vertices(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Build the read-only adjacency index for this graph. Pure function of
    /// (nodes, edges); callers own the returned index exclusively.
    pub fn adjacency(&self) -> AdjacencyIndex {
        AdjacencyIndex::build(&self.nodes, &self.edges)
    }
}

/// Outward half-edge stored in the adjacency index; `neighbor` is the dense
/// id of the vertex on the far side regardless of the original edge
/// orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub neighbor: usize,
    pub weight: Weight,
}

/// Eagerly constructed read-only adjacency view: a label -> dense id map and,
/// per vertex, the outward half-edges with both directions of every edge
/// materialized. Edges with endpoints outside the vertex list are skipped.
pub struct AdjacencyIndex {
    labels: Vec<String>,
    ids: AHashMap<String, usize>,
    outward: Vec<Vec<HalfEdge>>,
}

impl AdjacencyIndex {
    pub fn build(nodes: &[String], edges: &[Edge]) -> Self {
        let mut ids = AHashMap::with_capacity(nodes.len());
        let mut labels = Vec::with_capacity(nodes.len());
        for label in nodes {
            ids.entry(label.clone()).or_insert_with(|| {
                labels.push(label.clone());
                labels.len() - 1
            });
        }

        let mut outward = vec![Vec::new(); labels.len()];
        for edge in edges {
            match (ids.get(&edge.from), ids.get(&edge.to)) {
                (Some(&u), Some(&v)) => {
                    outward[u].push(HalfEdge {
                        neighbor: v,
                        weight: edge.weight,
                    });
                    outward[v].push(HalfEdge {
                        neighbor: u,
                        weight: edge.weight,
                    });
                }
                // unknown endpoint: tolerated, not indexed
                _ => continue,
            }
        }

        Self {
            labels,
            ids,
            outward,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn id_of(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: usize) -> &str {
        &self.labels[id]
    }

    pub fn outward(&self, id: usize) -> &[HalfEdge] {
        &self.outward[id]
    }

    /// One line per vertex: `  A -> B(1) C(5)`.
    pub fn to_display_string(&self) -> String {
        self.labels
            .iter()
            .enumerate()
            .map(|(id, label)| {
                format!(
                    "  {} -> {}",
                    label,
                    self.outward[id]
                        .iter()
                        .map(|half| format!("{}({})", self.labels[half.neighbor], half.weight))
                        .join(" ")
                )
            })
            .join("\n")
    }
}

#[cfg(test)]
pub(crate) fn graph_from(id: u32, nodes: &[&str], edges: &[(&str, &str, Weight)]) -> Graph {
    Graph {
        id,
        nodes: nodes.iter().map(|it| it.to_string()).collect(),
        edges: edges
            .iter()
            .map(|(from, to, weight)| Edge::new(*from, *to, *weight))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_mirrors_every_edge() {
        let graph = graph_from(1, &["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2)]);
        let adj = graph.adjacency();

        assert_eq!(adj.len(), 3);
        let a = adj.id_of("A").unwrap();
        let b = adj.id_of("B").unwrap();
        let c = adj.id_of("C").unwrap();

        assert_eq!(
            adj.outward(a),
            &[HalfEdge {
                neighbor: b,
                weight: 1
            }]
        );
        assert_eq!(
            adj.outward(b),
            &[
                HalfEdge {
                    neighbor: a,
                    weight: 1
                },
                HalfEdge {
                    neighbor: c,
                    weight: 2
                }
            ]
        );
        assert_eq!(
            adj.outward(c),
            &[HalfEdge {
                neighbor: b,
                weight: 2
            }]
        );
    }

    #[test]
    fn adjacency_skips_unknown_endpoints() {
        let graph = graph_from(1, &["A", "B"], &[("A", "X", 1), ("A", "B", 2)]);
        let adj = graph.adjacency();

        assert_eq!(adj.len(), 2);
        assert_eq!(adj.id_of("X"), None);
        let a = adj.id_of("A").unwrap();
        assert_eq!(adj.outward(a).len(), 1);
        assert_eq!(adj.outward(a)[0].weight, 2);
    }

    #[test]
    fn adjacency_keeps_parallel_edges() {
        let graph = graph_from(1, &["A", "B"], &[("A", "B", 5), ("A", "B", 3)]);
        let adj = graph.adjacency();

        let a = adj.id_of("A").unwrap();
        assert_eq!(adj.outward(a).len(), 2);
    }

    #[test]
    fn display_string_lists_neighbors_with_weights() {
        let graph = graph_from(1, &["A", "B", "C"], &[("A", "B", 1)]);
        let adj = graph.adjacency();

        assert_eq!(adj.to_display_string(), "  A -> B(1)\n  B -> A(1)\n  C -> ");
    }

    #[test]
    fn edge_display_format() {
        assert_eq!(Edge::new("A", "B", 3).to_string(), "A - B (3)");
    }
}

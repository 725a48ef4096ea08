pub mod generator;
pub mod graph;

/// Edge weights are non-negative integers by construction.
pub type Weight = u64;

use crate::problem::graph::Graph;

pub mod json_instance;
pub mod report;

pub fn load_instance(path: impl Into<String>) -> anyhow::Result<Vec<Graph>> {
    json_instance::load_instance(path)
}

//! Reader/writer for the JSON instance format:
//! `{ "graphs": [ { "id", "nodes": [...], "edges": [ { "from", "to",
//! "weight" } ] } ] }`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::problem::graph::Graph;

#[derive(Deserialize)]
struct InstanceFile {
    graphs: Vec<Graph>,
}

#[derive(Serialize)]
struct InstanceFileRef<'a> {
    graphs: &'a [Graph],
}

pub(crate) fn load_instance(path: impl Into<String>) -> anyhow::Result<Vec<Graph>> {
    let path = path.into();
    let f = File::open(&path).with_context(|| format!("cannot open instance file '{}'", path))?;
    let reader = BufReader::new(&f);
    let instance: InstanceFile = serde_json::from_reader(reader)
        .with_context(|| format!("malformed instance file '{}'", path))?;
    Ok(instance.graphs)
}

pub(crate) fn write_instance(path: &Path, graphs: &[Graph]) -> anyhow::Result<()> {
    let f = File::create(path)
        .with_context(|| format!("cannot create instance file '{}'", path.display()))?;
    let writer = BufWriter::new(&f);
    serde_json::to_writer_pretty(writer, &InstanceFileRef { graphs })?;
    Ok(())
}

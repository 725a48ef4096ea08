use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::solver::GraphComparison;

#[derive(Serialize)]
struct Report<'a> {
    results: &'a [GraphComparison],
}

/// Write the collected per-graph comparisons as pretty-printed JSON:
/// `{ "results": [ ... ] }`.
pub fn write_report(path: &Path, results: &[GraphComparison]) -> anyhow::Result<()> {
    let f = File::create(path)
        .with_context(|| format!("cannot create report file '{}'", path.display()))?;
    let writer = BufWriter::new(&f);
    serde_json::to_writer_pretty(writer, &Report { results })?;
    Ok(())
}

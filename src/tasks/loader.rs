// src/tasks/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::tasks::model::TaskGraph;
use crate::tasks::parser::parse_record;

/// Read an input file and build the task graph from its records.
///
/// The whole file is read into memory before any record is parsed. Successor
/// edges are not derived yet; use [`load_and_link`] for a graph that is
/// ready for scheduling.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TaskGraph> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_records(&contents)
}

/// Build a graph from in-memory record text. Lines are numbered from 1.
///
/// Every line is one record, so a blank line fails with a missing-id error
/// just like any other id-less record.
pub fn parse_records(contents: &str) -> Result<TaskGraph> {
    let mut graph = TaskGraph::new();
    for (index, line) in contents.lines().enumerate() {
        let task = parse_record(line, index + 1)?;
        graph.insert(task);
    }
    Ok(graph)
}

/// Recommended entry point: load records and derive successor edges.
pub fn load_and_link(path: impl AsRef<Path>) -> Result<TaskGraph> {
    let mut graph = load_from_path(path)?;
    graph.link_successors()?;
    debug!(tasks = graph.len(), "task graph loaded and linked");
    Ok(graph)
}

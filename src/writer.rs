// src/writer.rs

//! Serialization of a schedule back into task records.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::schedule::wave::Schedule;
use crate::tasks::model::{Task, TaskGraph};

/// Barrier token the executor waits on between waves.
pub const BARRIER: &str = "wait";

/// Keys never emitted on output records, compared case-insensitively.
const RESERVED_KEYS: [&str; 3] = ["id", "predecessors", "successors"];

/// Write the schedule to `path`: one record line per task in wave order,
/// with a [`BARRIER`] line after every non-final wave (empty waves
/// included). Any pre-existing file at `path` is removed first. Returns
/// the total wave count.
pub fn write_schedule(
    path: impl AsRef<Path>,
    graph: &TaskGraph,
    schedule: &Schedule,
) -> Result<usize> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut out = BufWriter::new(fs::File::create(path)?);
    let wave_count = schedule.len();

    for (index, wave) in schedule.waves().iter().enumerate() {
        for id in wave.iter() {
            if let Some(task) = graph.get(id) {
                writeln!(out, "{}", render_record(task))?;
            }
        }
        if index + 1 < wave_count {
            writeln!(out, "{BARRIER}")?;
        }
    }

    out.flush()?;
    debug!(waves = wave_count, ?path, "schedule file written");
    Ok(wave_count)
}

/// Render one task as space-joined `key="value"` tokens, skipping reserved
/// keys regardless of their casing.
fn render_record(task: &Task) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(task.attributes.len());
    for (key, value) in &task.attributes {
        if RESERVED_KEYS.contains(&key.to_lowercase().as_str()) {
            continue;
        }
        parts.push(format!("{key}=\"{value}\""));
    }
    parts.join(" ")
}

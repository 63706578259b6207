// src/schedule/balance.rs

//! Worker-budget rebalancing of an assigned schedule.

use tracing::debug;

use crate::schedule::wave::Schedule;
use crate::tasks::model::TaskGraph;

/// Shift tasks into later waves to fill spare worker capacity.
///
/// Every task takes one left-to-right sweep over the wave boundaries. The
/// task moves from wave `i` to wave `i + 1` when the target still has room
/// under `max_workers` and holds none of the task's successors. A single
/// sweep can carry a task across several boundaries; the sweep is not
/// repeated to a fixed point, and waves are never created, removed or
/// split. A wave that starts over budget stays over budget.
pub fn rebalance(schedule: &mut Schedule, graph: &TaskGraph, max_workers: usize) {
    let wave_count = schedule.len();

    for task in graph.tasks() {
        for i in 0..wave_count.saturating_sub(1) {
            if schedule.wave(i + 1).len() >= max_workers {
                continue;
            }
            if !schedule.wave(i).contains(&task.id) {
                continue;
            }
            let blocked = graph
                .successors_of(&task.id)
                .iter()
                .any(|successor| schedule.wave(i + 1).contains(successor));
            if !blocked {
                schedule.move_task(i, i + 1, &task.id);
            }
        }
    }

    debug!(waves = wave_count, max_workers, "rebalancing complete");
}

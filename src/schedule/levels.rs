// src/schedule/levels.rs

//! Initial wave assignment by bounded wavefront propagation.

use tracing::debug;

use crate::schedule::wave::Schedule;
use crate::tasks::model::{TaskGraph, TaskId};

/// Assign every task to a wave.
///
/// Wave 0 holds all tasks without predecessors, in input order. Each pass
/// takes a snapshot of the current frontier wave, appends the successors of
/// its tasks to a freshly created next wave (deduplicated), and removes them
/// from the frontier where present. At most one wave is created per pass,
/// and the pointer then advances to it. The number of passes equals the
/// task count, an upper bound on the graph diameter, so the walk terminates
/// without a visited set, even though cyclic inputs are never detected.
///
/// Only the frontier wave is checked when a successor is re-encountered: a
/// task first placed via a shallow predecessor and reached again through a
/// deeper chain stays in the earlier wave as well. Downstream consumers
/// depend on the resulting wave assignment, so this is not longest-path
/// leveling and must not be turned into it.
pub fn assign_waves(graph: &TaskGraph) -> Schedule {
    let mut schedule = Schedule::new();
    let mut frontier = schedule.push_wave();

    for task in graph.tasks() {
        if task.predecessors.is_empty() {
            schedule.wave_mut(frontier).push(&task.id);
        }
    }

    for _ in 0..graph.len() {
        // Snapshot: the frontier shrinks while successors are pulled out
        // of it below.
        let current: Vec<TaskId> = schedule.wave(frontier).ids().to_vec();
        let mut next: Option<usize> = None;

        for id in &current {
            let successors = graph.successors_of(id);
            if successors.is_empty() {
                continue;
            }
            let target = *next.get_or_insert_with(|| schedule.push_wave());
            for successor in successors {
                schedule.wave_mut(target).push(successor);
                schedule.wave_mut(frontier).remove(successor);
            }
        }

        if let Some(target) = next {
            frontier = target;
        }
    }

    debug!(waves = schedule.len(), "initial wave assignment complete");
    schedule
}

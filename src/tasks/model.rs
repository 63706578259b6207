// src/tasks/model.rs

use indexmap::IndexMap;

use crate::errors::{Result, WaveplanError};

pub type TaskId = String;

/// One task record from the input file.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    /// Direct dependencies, in the order they were listed.
    pub predecessors: Vec<TaskId>,
    /// Direct dependents. Never read from the input; derived by
    /// [`TaskGraph::link_successors`].
    pub successors: Vec<TaskId>,
    /// Pass-through attributes in first-insertion order.
    pub attributes: IndexMap<String, String>,
}

/// In-memory dependency graph keyed by task id, in input-line order.
///
/// Acyclicity is assumed, not checked; a cyclic input produces an
/// unspecified wave assignment. A duplicate id replaces the earlier record
/// while keeping its position.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: IndexMap<TaskId, Task>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks, in input-line order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Immediate dependents of a task, empty for unknown ids.
    pub fn successors_of(&self, id: &str) -> &[TaskId] {
        self.tasks
            .get(id)
            .map(|t| t.successors.as_slice())
            .unwrap_or(&[])
    }

    /// Second construction pass: invert every predecessor edge.
    ///
    /// For each task T and each predecessor P of T, appends T's id to P's
    /// successor list, once per occurrence, in input-line order. Fails on
    /// the first predecessor id that names no known task.
    pub fn link_successors(&mut self) -> Result<()> {
        // Collect the edges first to keep the borrow checker out of the
        // mutation loop.
        let edges: Vec<(TaskId, Vec<TaskId>)> = self
            .tasks
            .values()
            .map(|t| (t.id.clone(), t.predecessors.clone()))
            .collect();

        for (id, predecessors) in edges {
            for predecessor in predecessors {
                match self.tasks.get_mut(&predecessor) {
                    Some(task) => task.successors.push(id.clone()),
                    None => {
                        return Err(WaveplanError::DanglingReferenceError {
                            task: id,
                            reference: predecessor,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

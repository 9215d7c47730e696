//! Prep task model.
//!
//! A task is the smallest schedulable unit of kitchen work: it has a
//! duration, a set of required equipment, dependencies on other tasks,
//! and a post-use cleaning overhead for the equipment it touches.
//!
//! Tasks are immutable once assembled into a graph; the scheduler never
//! mutates them, it only wraps them in [`ScheduledTask`](super::ScheduledTask)
//! records carrying computed time slots.

use serde::{Deserialize, Serialize};

/// A unit of prep work to be scheduled.
///
/// # Time Representation
/// Durations are whole minutes. Wall-clock placement happens only at
/// scheduling time, relative to a session start supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable name (e.g., "Caramelize Onions").
    pub name: String,
    /// Active work time in minutes (>= 0).
    pub duration_min: i64,
    /// IDs of equipment this task occupies while running.
    pub equipment: Vec<String>,
    /// IDs of tasks that must finish before this one starts.
    pub dependencies: Vec<String>,
    /// Minutes the equipment stays occupied after the task ends.
    pub cleaning_min: i64,
    /// Advisory hint that the task tolerates running alongside others.
    /// The scheduler does not consult it; reporting collaborators may.
    pub parallelizable: bool,
}

impl Task {
    /// Creates a new task with the given ID. The name defaults to the ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            duration_min: 0,
            equipment: Vec::new(),
            dependencies: Vec::new(),
            cleaning_min: 0,
            parallelizable: false,
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the active duration in minutes.
    pub fn with_duration_min(mut self, minutes: i64) -> Self {
        self.duration_min = minutes.max(0);
        self
    }

    /// Adds a required equipment ID.
    pub fn with_equipment(mut self, equipment_id: impl Into<String>) -> Self {
        self.equipment.push(equipment_id.into());
        self
    }

    /// Adds a dependency on another task.
    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.dependencies.push(task_id.into());
        self
    }

    /// Sets the post-use cleaning time in minutes.
    pub fn with_cleaning_min(mut self, minutes: i64) -> Self {
        self.cleaning_min = minutes.max(0);
        self
    }

    /// Marks the task as parallelizable (advisory).
    pub fn with_parallelizable(mut self, parallelizable: bool) -> Self {
        self.parallelizable = parallelizable;
        self
    }

    /// Total minutes the task's equipment is held: work plus cleaning.
    #[inline]
    pub fn occupancy_min(&self) -> i64 {
        self.duration_min + self.cleaning_min
    }
}

//! Error types for scheduling runs.
//!
//! All failures are caller-input problems or defensive guards; the
//! scheduler itself never fails on equipment contention under the default
//! policy (it serializes instead). Contention only surfaces as a hard
//! error under [`ContentionPolicy::Reject`](crate::scheduler::ContentionPolicy),
//! or ex-post as a [`Conflict`](crate::models::Conflict) from the detector.

use thiserror::Error;

/// Errors produced while building or analyzing a schedule.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The dependency graph contains a cycle. Names a task on the active
    /// traversal stack when it was revisited.
    #[error("dependency cycle detected involving task '{task_id}'")]
    CycleDetected {
        /// A task participating in the cycle.
        task_id: String,
    },

    /// A dependency references a task ID that is not in the input set.
    #[error("task '{referenced_by}' depends on unknown task '{task_id}'")]
    UnknownTask {
        /// The unresolved task ID.
        task_id: String,
        /// The task whose dependency list references it.
        referenced_by: String,
    },

    /// A task requires an equipment ID that is not in the supplied inventory.
    #[error("task '{task_id}' requires unknown equipment '{equipment_id}'")]
    UnknownEquipment {
        /// The unresolved equipment ID.
        equipment_id: String,
        /// The task requiring it.
        task_id: String,
    },

    /// Equipment availability forced a task past its dependency-ready time
    /// while the scheduler was configured to reject contention.
    #[error("task '{task_id}' delayed by contention on equipment '{equipment_id}'")]
    EquipmentContention {
        /// The delayed task.
        task_id: String,
        /// The contended equipment.
        equipment_id: String,
    },

    /// A graph traversal exceeded the defensive depth bound.
    #[error("graph traversal exceeded depth limit of {limit}")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl ScheduleError {
    /// Short stable label (snake_case) for logs and metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ScheduleError::CycleDetected { .. } => "cycle_detected",
            ScheduleError::UnknownTask { .. } => "unknown_task",
            ScheduleError::UnknownEquipment { .. } => "unknown_equipment",
            ScheduleError::EquipmentContention { .. } => "equipment_contention",
            ScheduleError::DepthExceeded { .. } => "depth_exceeded",
        }
    }
}

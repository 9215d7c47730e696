//! Timeline (schedule output) model.
//!
//! A timeline is the time-stamped result of a scheduling run: scheduled
//! tasks in execution order, the unconstrained critical path, and a total
//! duration that includes a 10% safety buffer on top of the computed span.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Task;

/// A task placed on the timeline with a concrete time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// The underlying task definition.
    pub task: Task,
    /// Scheduled start.
    pub start: NaiveDateTime,
    /// Scheduled end (start + duration; cleaning time is not included).
    pub end: NaiveDateTime,
    /// Equipment IDs bound to this slot.
    pub equipment: Vec<String>,
    /// Execution lifecycle status.
    pub status: TaskStatus,
}

/// Execution status of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started yet.
    Pending,
    /// Currently running.
    InProgress,
    /// Finished.
    Completed,
}

/// The ordered, time-stamped output of a scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Session start time.
    pub start: NaiveDateTime,
    /// Scheduled tasks in execution order.
    pub tasks: Vec<ScheduledTask>,
    /// Total duration in minutes, buffer included.
    pub total_duration_min: i64,
    /// Names of tasks on the longest duration-weighted dependency chain.
    pub critical_path: Vec<String>,
    /// Minutes of safety margin included in `total_duration_min`.
    pub buffer_min: i64,
}

impl ScheduledTask {
    /// Creates a pending scheduled task.
    pub fn new(task: Task, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let equipment = task.equipment.clone();
        Self {
            task,
            start,
            end,
            equipment,
            status: TaskStatus::Pending,
        }
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl Timeline {
    /// Creates an empty timeline starting at `start`.
    pub fn empty(start: NaiveDateTime) -> Self {
        Self {
            start,
            tasks: Vec::new(),
            total_duration_min: 0,
            critical_path: Vec::new(),
            buffer_min: 0,
        }
    }

    /// Minutes from the session start to the latest task end, before buffer.
    pub fn base_duration_min(&self) -> i64 {
        self.tasks
            .iter()
            .map(|st| (st.end - self.start).num_minutes())
            .max()
            .unwrap_or(0)
            .max(0)
    }

    /// Applies the 10% buffer rule: total = ceil(base * 1.1).
    ///
    /// Recomputes `total_duration_min` and `buffer_min` from the current
    /// task ends. Call after any pass that moves tasks.
    pub fn apply_buffer_rule(&mut self) {
        let base = self.base_duration_min();
        self.total_duration_min = buffered_duration_min(base);
        self.buffer_min = self.total_duration_min - base;
    }
}

/// ceil(base * 1.1) in integer minutes.
#[inline]
pub fn buffered_duration_min(base_min: i64) -> i64 {
    (base_min * 11 + 9) / 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_timeline() {
        let tl = Timeline::empty(at(14, 0));
        assert!(tl.tasks.is_empty());
        assert_eq!(tl.total_duration_min, 0);
        assert_eq!(tl.base_duration_min(), 0);
        assert!(tl.critical_path.is_empty());
    }

    #[test]
    fn test_buffered_duration_exact_ceiling() {
        assert_eq!(buffered_duration_min(0), 0);
        assert_eq!(buffered_duration_min(10), 11);
        assert_eq!(buffered_duration_min(53), 59); // ceil(58.3)
        assert_eq!(buffered_duration_min(100), 110);
        assert_eq!(buffered_duration_min(1), 2); // ceil(1.1)
    }

    #[test]
    fn test_apply_buffer_rule() {
        let mut tl = Timeline::empty(at(14, 0));
        let task = Task::new("rice").with_duration_min(30);
        tl.tasks.push(ScheduledTask::new(task, at(14, 0), at(14, 30)));
        tl.apply_buffer_rule();
        assert_eq!(tl.base_duration_min(), 30);
        assert_eq!(tl.total_duration_min, 33);
        assert_eq!(tl.buffer_min, 3);
    }

    #[test]
    fn test_scheduled_task_binds_equipment() {
        let task = Task::new("rice").with_equipment("rice-cooker");
        let st = ScheduledTask::new(task, at(14, 0), at(14, 30));
        assert_eq!(st.equipment, vec!["rice-cooker"]);
        assert_eq!(st.status, TaskStatus::Pending);
        assert_eq!(st.duration_min(), 30);
    }
}

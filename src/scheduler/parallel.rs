//! Parallel-packing estimator for utilization reporting.
//!
//! A dependency-agnostic heuristic view: tasks are packed greedily onto
//! per-equipment lanes in duration-descending order, each starting at its
//! equipment's current earliest-free time. Dependencies, cleaning time,
//! and unit quantities are all ignored.
//!
//! This exists purely to visualize how busy each piece of equipment could
//! be; it must not be confused with the dependency-respecting
//! [`PrepScheduler`](super::PrepScheduler).

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};

use crate::models::{ScheduledTask, Task};

/// Result of a parallel-packing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelEstimate {
    /// Packed tasks in placement order (duration descending).
    pub timeline: Vec<ScheduledTask>,
    /// Makespan in minutes: session start to latest end.
    pub total_min: i64,
    /// Per-equipment utilization percentage (0.0..=100.0):
    /// summed task minutes on that equipment / makespan x 100.
    pub utilization: HashMap<String, f64>,
}

/// Packs tasks onto equipment lanes, ignoring dependencies.
///
/// Sort is stable: equal durations keep input order.
pub fn optimize_parallel(tasks: &[Task], start: NaiveDateTime) -> ParallelEstimate {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| b.duration_min.cmp(&a.duration_min));

    let mut lane_free: HashMap<&str, NaiveDateTime> = HashMap::new();
    let mut busy_min: HashMap<String, i64> = HashMap::new();
    let mut timeline: Vec<ScheduledTask> = Vec::with_capacity(tasks.len());
    let mut latest_end = start;

    for task in ordered {
        let task_start = task
            .equipment
            .iter()
            .filter_map(|eq| lane_free.get(eq.as_str()).copied())
            .max()
            .unwrap_or(start);
        let task_end = task_start + Duration::minutes(task.duration_min);

        for eq in &task.equipment {
            lane_free.insert(eq.as_str(), task_end);
            *busy_min.entry(eq.clone()).or_insert(0) += task.duration_min;
        }

        latest_end = latest_end.max(task_end);
        timeline.push(ScheduledTask::new(task.clone(), task_start, task_end));
    }

    let total_min = (latest_end - start).num_minutes();
    let utilization = busy_min
        .into_iter()
        .map(|(eq, busy)| {
            let pct = if total_min > 0 {
                busy as f64 / total_min as f64 * 100.0
            } else {
                0.0
            };
            (eq, pct)
        })
        .collect();

    ParallelEstimate {
        timeline,
        total_min,
        utilization,
    }
}

//! Resource-constrained forward scheduler.
//!
//! # Algorithm
//!
//! 1. Build the task graph and order it topologically.
//! 2. For each task in order, earliest start = max(session start,
//!    latest dependency end, latest required-equipment free time).
//! 3. After placement, each required equipment's free time advances to
//!    task end + cleaning time — equipment is held through its cleaning
//!    window.
//!
//! The scheduler is greedy: it never backtracks and never rejects on
//! contention under the default policy, it just serializes onto later
//! slots. Contention surfaces ex-post through the
//! [`conflict`](crate::conflict) detector instead.
//!
//! # Contention models
//!
//! Two models are supported and pinned by tests:
//! - [`CapacityModel::SingleSlot`] (default): one free-time slot per
//!   equipment ID; `quantity` is not consulted. This reproduces the
//!   source behavior.
//! - [`CapacityModel::PerUnit`]: `quantity` slots per equipment ID, each
//!   task taking the earliest-free unit — the same pooled-unit model the
//!   conflict detector uses.
//!
//! # Complexity
//! O(n · (d + e·q)) for n tasks, d dependencies, e equipment per task,
//! q units per equipment.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::error::ScheduleError;
use crate::graph::TaskGraph;
use crate::models::{Equipment, ScheduledTask, Task, Timeline};

use super::critical_path::critical_path_names;

/// How equipment capacity is modeled during forward scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityModel {
    /// One free-time slot per equipment ID; quantity ignored.
    #[default]
    SingleSlot,
    /// One free-time slot per physical unit (quantity-aware).
    PerUnit,
}

/// What to do when equipment availability, rather than dependencies, is
/// what forces a task later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentionPolicy {
    /// Serialize onto the next free slot (source behavior).
    #[default]
    Serialize,
    /// Fail the run with [`ScheduleError::EquipmentContention`].
    Reject,
}

/// Greedy, dependency- and equipment-aware timeline builder.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use prep_schedule::models::{Equipment, Task};
/// use prep_schedule::scheduler::PrepScheduler;
///
/// let tasks = vec![
///     Task::new("rice").with_duration_min(30).with_equipment("rice-cooker"),
///     Task::new("assemble").with_duration_min(5).with_dependency("rice"),
/// ];
/// let equipment = vec![Equipment::appliance("rice-cooker")];
/// let start = NaiveDate::from_ymd_opt(2025, 3, 1)
///     .unwrap()
///     .and_hms_opt(14, 0, 0)
///     .unwrap();
///
/// let timeline = PrepScheduler::new().schedule(&tasks, &equipment, start).unwrap();
/// assert_eq!(timeline.tasks.len(), 2);
/// assert_eq!(timeline.total_duration_min, 39); // ceil(35 * 1.1)
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrepScheduler {
    capacity: CapacityModel,
    contention: ContentionPolicy,
}

impl PrepScheduler {
    /// Creates a scheduler with default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity model.
    pub fn with_capacity_model(mut self, capacity: CapacityModel) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the contention policy.
    pub fn with_contention_policy(mut self, contention: ContentionPolicy) -> Self {
        self.contention = contention;
        self
    }

    /// Builds a timeline for the given tasks and equipment inventory.
    ///
    /// The equipment slice is a read-only snapshot (typically
    /// [`EquipmentRegistry::snapshot`](crate::registry::EquipmentRegistry::snapshot));
    /// the scheduler never mutates registry state.
    ///
    /// # Errors
    /// - [`ScheduleError::CycleDetected`] for cyclic dependencies.
    /// - [`ScheduleError::UnknownTask`] / [`ScheduleError::UnknownEquipment`]
    ///   for unresolved references; no partial timeline is returned.
    /// - [`ScheduleError::EquipmentContention`] only under
    ///   [`ContentionPolicy::Reject`].
    pub fn schedule(
        &self,
        tasks: &[Task],
        equipment: &[Equipment],
        start: NaiveDateTime,
    ) -> Result<Timeline, ScheduleError> {
        let graph = TaskGraph::build(tasks)?;
        if graph.is_empty() {
            return Ok(Timeline::empty(start));
        }
        let order = graph.topological_order()?;

        let inventory: HashMap<&str, &Equipment> =
            equipment.iter().map(|e| (e.id.as_str(), e)).collect();
        for task in graph.tasks() {
            for eq_id in &task.equipment {
                if !inventory.contains_key(eq_id.as_str()) {
                    return Err(ScheduleError::UnknownEquipment {
                        equipment_id: eq_id.clone(),
                        task_id: task.id.clone(),
                    });
                }
            }
        }

        // Free-time slots per equipment id: one slot, or one per unit.
        let mut slots: HashMap<&str, Vec<NaiveDateTime>> = HashMap::new();
        for task in graph.tasks() {
            for eq_id in &task.equipment {
                slots.entry(eq_id.as_str()).or_insert_with(|| {
                    let units = match self.capacity {
                        CapacityModel::SingleSlot => 1,
                        CapacityModel::PerUnit => {
                            inventory[eq_id.as_str()].quantity.max(1) as usize
                        }
                    };
                    vec![start; units]
                });
            }
        }

        let mut end_times: HashMap<&str, NaiveDateTime> = HashMap::with_capacity(graph.len());
        let mut scheduled: Vec<ScheduledTask> = Vec::with_capacity(graph.len());

        for &task in &order {
            let dep_ready = task
                .dependencies
                .iter()
                .filter_map(|dep| end_times.get(dep.as_str()).copied())
                .max()
                .unwrap_or(start)
                .max(start);

            // Earliest-free slot per required equipment, deduplicated so a
            // repeated id does not double-book one unit.
            let mut picks: Vec<(&str, usize)> = Vec::with_capacity(task.equipment.len());
            let mut equip_ready = dep_ready;
            let mut blocking: Option<&str> = None;
            for eq_id in &task.equipment {
                if picks.iter().any(|(id, _)| *id == eq_id.as_str()) {
                    continue;
                }
                let free = &slots[eq_id.as_str()];
                let (slot_idx, &slot_free) = free
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, t)| **t)
                    .expect("equipment has at least one slot");
                picks.push((eq_id.as_str(), slot_idx));
                if slot_free > equip_ready {
                    equip_ready = slot_free;
                    blocking = Some(eq_id.as_str());
                }
            }

            if self.contention == ContentionPolicy::Reject {
                if let Some(eq_id) = blocking {
                    return Err(ScheduleError::EquipmentContention {
                        task_id: task.id.clone(),
                        equipment_id: eq_id.to_string(),
                    });
                }
            }

            let task_start = equip_ready;
            let task_end = task_start + Duration::minutes(task.duration_min);
            let held_until = task_end + Duration::minutes(task.cleaning_min);

            for (eq_id, slot_idx) in picks {
                slots.get_mut(eq_id).expect("slot exists")[slot_idx] = held_until;
            }
            end_times.insert(task.id.as_str(), task_end);
            debug!(
                task = task.id.as_str(),
                start = %task_start,
                end = %task_end,
                "task placed"
            );

            scheduled.push(ScheduledTask::new(task.clone(), task_start, task_end));
        }

        let critical_path = critical_path_names(&graph)?;
        let mut timeline = Timeline {
            start,
            tasks: scheduled,
            total_duration_min: 0,
            critical_path,
            buffer_min: 0,
        };
        timeline.apply_buffer_rule();
        Ok(timeline)
    }
}

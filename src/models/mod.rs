//! Meal-prep scheduling domain models.
//!
//! Core data types for describing a prep session and its results:
//!
//! | Type | Role |
//! |------|------|
//! | [`Task`] | Unit of prep work with duration, equipment, dependencies |
//! | [`Equipment`] | Physical resource with pooled identical units |
//! | [`ScheduledTask`] / [`Timeline`] | Time-stamped scheduling output |
//! | [`EquipmentUsage`] / [`Conflict`] | Conflict-detection input/output |
//!
//! All types are serde-serializable plain records; behavior lives in the
//! scheduler, registry, and conflict modules.

mod equipment;
mod task;
mod timeline;
mod usage;

pub use equipment::{Equipment, EquipmentCategory, EquipmentStatus};
pub use task::Task;
pub use timeline::{buffered_duration_min, ScheduledTask, TaskStatus, Timeline};
pub use usage::{Conflict, EquipmentUsage};

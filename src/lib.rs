//! Meal-prep scheduling and shared-equipment resource engine.
//!
//! Given a set of cooking tasks (durations, dependencies, equipment
//! needs) and a start time, produces an executable timeline that
//! respects task dependencies, shared-equipment capacity, and post-use
//! cleaning overhead. Also ships an ex-post conflict detector for
//! externally edited schedules and a dependency-agnostic packing view
//! for utilization reporting.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Equipment`, `ScheduledTask`,
//!   `Timeline`, `EquipmentUsage`, `Conflict`
//! - **`graph`**: Dependency graph assembly and cycle-safe topological
//!   ordering
//! - **`scheduler`**: Forward timeline builder, cleaning-buffer pass,
//!   critical path analysis, parallel-packing estimator
//! - **`registry`**: Process-wide equipment inventory and status state
//!   machine (the only long-lived mutable state)
//! - **`conflict`**: Quantity-aware capacity-violation detection over
//!   arbitrary usage sets
//! - **`error`**: `ScheduleError`
//!
//! # Architecture
//!
//! Everything except the registry is a pure, single-threaded,
//! deterministic batch computation: no I/O, no suspension points, and no
//! retained state across runs. Persistence, notification dispatch, and
//! transport belong to the surrounding application, which calls this
//! crate around its own edges.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use prep_schedule::models::{Equipment, Task};
//! use prep_schedule::scheduler::{insert_cleaning_buffers, PrepScheduler};
//!
//! let tasks = vec![
//!     Task::new("chop")
//!         .with_name("Chop Vegetables")
//!         .with_duration_min(10)
//!         .with_equipment("board"),
//!     Task::new("saute")
//!         .with_name("Saute Vegetables")
//!         .with_duration_min(15)
//!         .with_dependency("chop")
//!         .with_equipment("stove"),
//! ];
//! let equipment = vec![Equipment::tool("board"), Equipment::appliance("stove")];
//! let start = NaiveDate::from_ymd_opt(2025, 3, 1)
//!     .unwrap()
//!     .and_hms_opt(14, 0, 0)
//!     .unwrap();
//!
//! let timeline = PrepScheduler::new().schedule(&tasks, &equipment, start).unwrap();
//! assert_eq!(timeline.critical_path, vec!["Chop Vegetables", "Saute Vegetables"]);
//!
//! let padded = insert_cleaning_buffers(&timeline, 5);
//! assert_eq!(padded, timeline); // no equipment reuse, nothing to pad
//! ```

pub mod conflict;
pub mod error;
pub mod graph;
pub mod models;
pub mod registry;
pub mod scheduler;

//! Timeline construction and analysis passes.
//!
//! # Pipeline
//!
//! [`PrepScheduler`] walks the topological order and produces a
//! [`Timeline`](crate::models::Timeline); [`insert_cleaning_buffers`]
//! is an optional post-pass enforcing idle gaps between equipment uses;
//! [`find_critical_path`] reports the unconstrained longest dependency
//! chain. [`optimize_parallel`] is an independent, dependency-agnostic
//! packing view for utilization reporting.
//!
//! All passes are pure, synchronous, and deterministic: identical inputs
//! produce identical timelines.

mod buffers;
mod critical_path;
mod forward;
mod parallel;

pub use buffers::insert_cleaning_buffers;
pub use critical_path::find_critical_path;
pub use forward::{CapacityModel, ContentionPolicy, PrepScheduler};
pub use parallel::{optimize_parallel, ParallelEstimate};

//! Equipment usage and conflict records.
//!
//! [`EquipmentUsage`] is the input unit for ex-post conflict detection:
//! one occupied interval on one piece of equipment, typically produced by
//! a user rearranging a timeline by hand. [`Conflict`] is a detected
//! capacity violation bundling the overlapping usages with a suggested
//! resolution.
//!
//! Overlap is half-open `[start, end)`: an interval ending exactly when
//! another begins does not overlap it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One occupied interval on one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentUsage {
    /// Equipment being occupied.
    pub equipment_id: String,
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
    /// Label of the task occupying the equipment.
    pub task_label: String,
}

/// A detected equipment-capacity violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Overbooked equipment ID.
    pub equipment_id: String,
    /// Display name of the equipment.
    pub equipment_name: String,
    /// The overlapping usages, earliest first.
    pub usages: Vec<EquipmentUsage>,
    /// Delay-based resolution suggestion.
    pub resolution: String,
    /// Substitute equipment IDs that could absorb the overflow.
    pub alternatives: Vec<String>,
}

impl EquipmentUsage {
    /// Creates a usage record.
    pub fn new(
        equipment_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        task_label: impl Into<String>,
    ) -> Self {
        Self {
            equipment_id: equipment_id.into(),
            start,
            end,
            task_label: task_label.into(),
        }
    }

    /// Half-open interval overlap: `[a.start, a.end)` vs `[b.start, b.end)`.
    #[inline]
    pub fn overlaps(&self, other: &EquipmentUsage) -> bool {
        self.start < other.end && other.start < self.end
    }
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

    fn usage(start: NaiveDateTime, end: NaiveDateTime) -> EquipmentUsage {
        EquipmentUsage::new("oven", start, end, "Roast")
    }

    #[test]
    fn test_overlapping_intervals() {
        let a = usage(at(14, 0), at(14, 30));
        let b = usage(at(14, 15), at(14, 45));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        // Half-open: ending exactly when the next starts is not a clash.
        let a = usage(at(14, 0), at(14, 30));
        let b = usage(at(14, 30), at(15, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        let outer = usage(at(14, 0), at(15, 0));
        let inner = usage(at(14, 20), at(14, 40));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}

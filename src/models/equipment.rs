//! Kitchen equipment model.
//!
//! Equipment is a physical resource with a finite quantity of
//! interchangeable units (two identical pans are one `Equipment` with
//! `quantity = 2`). Each record tracks a lifecycle status and how many
//! units are currently available.
//!
//! The records themselves are plain data; all mutation goes through the
//! [`EquipmentRegistry`](crate::registry::EquipmentRegistry), which owns
//! the status state machine and keeps `available_count` inside
//! `[0, quantity]`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A physical kitchen resource with pooled identical units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    /// Unique equipment identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Equipment classification.
    pub category: EquipmentCategory,
    /// Total physical units (>= 1).
    pub quantity: u32,
    /// Current lifecycle status.
    pub status: EquipmentStatus,
    /// Units currently free to use (0..=quantity).
    pub available_count: u32,
    /// When the item is expected to free up (e.g., dishwasher cycle end).
    pub estimated_free: Option<NaiveDateTime>,
}

/// Equipment lifecycle status.
///
/// Transitions are applied by the registry: leaving `Clean` releases an
/// available unit, returning to `Clean` restores one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentStatus {
    /// Ready to use.
    Clean,
    /// Occupied by a running task.
    InUse,
    /// Used and awaiting cleaning.
    Dirty,
    /// Currently in a dishwasher cycle.
    Dishwasher,
    /// Out of service.
    Maintenance,
}

/// Equipment classification.
///
/// Determines cleaning semantics: only cookware and tools go through
/// dishwasher cycles; appliances are wiped in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentCategory {
    /// Powered fixture (oven, stove, blender).
    Appliance,
    /// Pots, pans, trays.
    Cookware,
    /// Knives, boards, utensils.
    Tool,
    /// Domain-specific category.
    Custom(String),
}

impl Equipment {
    /// Creates a new equipment record, clean with all units available.
    pub fn new(id: impl Into<String>, category: EquipmentCategory) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            category,
            quantity: 1,
            status: EquipmentStatus::Clean,
            available_count: 1,
            estimated_free: None,
        }
    }

    /// Creates an appliance.
    pub fn appliance(id: impl Into<String>) -> Self {
        Self::new(id, EquipmentCategory::Appliance)
    }

    /// Creates cookware.
    pub fn cookware(id: impl Into<String>) -> Self {
        Self::new(id, EquipmentCategory::Cookware)
    }

    /// Creates a tool.
    pub fn tool(id: impl Into<String>) -> Self {
        Self::new(id, EquipmentCategory::Tool)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the unit count. All units start available.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self.available_count = self.quantity;
        self
    }

    /// Whether the item can go through a dishwasher cycle.
    #[inline]
    pub fn is_dishwasher_safe(&self) -> bool {
        matches!(
            self.category,
            EquipmentCategory::Cookware | EquipmentCategory::Tool
        )
    }

    /// Whether at least one unit is free.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.available_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_clean_and_available() {
        let oven = Equipment::appliance("oven").with_name("Oven");
        assert_eq!(oven.status, EquipmentStatus::Clean);
        assert_eq!(oven.quantity, 1);
        assert_eq!(oven.available_count, 1);
        assert!(oven.is_available());
        assert!(oven.estimated_free.is_none());
    }

    #[test]
    fn test_quantity_floors_at_one() {
        let pan = Equipment::cookware("pan").with_quantity(0);
        assert_eq!(pan.quantity, 1);
        assert_eq!(pan.available_count, 1);
    }

    #[test]
    fn test_quantity_resets_available() {
        let pan = Equipment::cookware("pan").with_quantity(3);
        assert_eq!(pan.available_count, 3);
    }

    #[test]
    fn test_dishwasher_safety_by_category() {
        assert!(Equipment::cookware("pot").is_dishwasher_safe());
        assert!(Equipment::tool("knife").is_dishwasher_safe());
        assert!(!Equipment::appliance("stove").is_dishwasher_safe());
        let custom = Equipment::new("sous-vide", EquipmentCategory::Custom("gadget".into()));
        assert!(!custom.is_dishwasher_safe());
    }
}

//! Process-wide equipment registry and status state machine.
//!
//! The registry is the only long-lived, mutable state in the engine. It
//! outlives individual scheduling runs and is mutated exclusively through
//! explicit status transitions and dishwasher-cycle operations — the
//! scheduler consumes read-only snapshots and never writes back.
//!
//! # State machine
//!
//! Statuses: `Clean`, `InUse`, `Dirty`, `Dishwasher`, `Maintenance`.
//! Leaving `Clean` releases one available unit (floor 0); returning to
//! `Clean` restores one (capped at `quantity`). Transitions are
//! single-entity operations with no referential check against active
//! schedules — a scheduled item may still be marked `Dirty` underneath a
//! timeline that references it.
//!
//! # Concurrency
//!
//! All state lives behind one `RwLock`; writes are serialized, so the
//! available-count bounds can never be raced past. Reads return cloned
//! snapshots, a consistent view per call.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, warn};

use crate::models::{Equipment, EquipmentStatus};

/// Fixed dishwasher cycle length in minutes.
pub const DISHWASHER_CYCLE_MIN: i64 = 60;

/// Shared, mutable inventory of equipment instances.
#[derive(Debug, Default)]
pub struct EquipmentRegistry {
    items: RwLock<HashMap<String, Equipment>>,
}

impl EquipmentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with equipment.
    pub fn with_equipment(equipment: Vec<Equipment>) -> Self {
        let registry = Self::new();
        for item in equipment {
            registry.register(item);
        }
        registry
    }

    /// Adds or replaces an equipment record.
    pub fn register(&self, equipment: Equipment) {
        let mut items = self.items.write().expect("equipment registry poisoned");
        items.insert(equipment.id.clone(), equipment);
    }

    /// Removes an equipment record. Returns it if present.
    pub fn remove(&self, equipment_id: &str) -> Option<Equipment> {
        let mut items = self.items.write().expect("equipment registry poisoned");
        items.remove(equipment_id)
    }

    /// Looks up a single item (cloned snapshot).
    pub fn get(&self, equipment_id: &str) -> Option<Equipment> {
        let items = self.items.read().expect("equipment registry poisoned");
        items.get(equipment_id).cloned()
    }

    /// Snapshot of the full inventory, ordered by ID for determinism.
    pub fn snapshot(&self) -> Vec<Equipment> {
        let items = self.items.read().expect("equipment registry poisoned");
        let mut all: Vec<Equipment> = items.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Items with at least one free unit, ordered by ID.
    pub fn available(&self) -> Vec<Equipment> {
        self.snapshot()
            .into_iter()
            .filter(Equipment::is_available)
            .collect()
    }

    /// Items currently in the given status, ordered by ID.
    pub fn in_status(&self, status: EquipmentStatus) -> Vec<Equipment> {
        self.snapshot()
            .into_iter()
            .filter(|e| e.status == status)
            .collect()
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        let items = self.items.read().expect("equipment registry poisoned");
        items.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transitions an item to a new status, adjusting `available_count`.
    ///
    /// Returns `false` for unknown IDs — status updates are best-effort
    /// inventory bookkeeping, not errors.
    pub fn update_status(&self, equipment_id: &str, new_status: EquipmentStatus) -> bool {
        let mut items = self.items.write().expect("equipment registry poisoned");
        let Some(item) = items.get_mut(equipment_id) else {
            warn!(equipment_id, "status update for unknown equipment");
            return false;
        };

        apply_transition(item, new_status);
        debug!(
            equipment_id,
            status = ?item.status,
            available = item.available_count,
            "equipment status updated"
        );
        true
    }

    /// Sends all dirty dishwasher-safe items (cookware and tools) into a
    /// dishwasher cycle, stamping their estimated free time.
    ///
    /// Returns affected equipment IDs, ordered by ID. No-op when nothing
    /// qualifies.
    pub fn start_dishwasher_cycle(&self, now: NaiveDateTime) -> Vec<String> {
        let mut items = self.items.write().expect("equipment registry poisoned");
        let free_at = now + Duration::minutes(DISHWASHER_CYCLE_MIN);
        let mut affected = Vec::new();

        for item in items.values_mut() {
            if item.status == EquipmentStatus::Dirty && item.is_dishwasher_safe() {
                apply_transition(item, EquipmentStatus::Dishwasher);
                item.estimated_free = Some(free_at);
                affected.push(item.id.clone());
            }
        }

        affected.sort();
        debug!(count = affected.len(), "dishwasher cycle started");
        affected
    }

    /// Returns all items from a finished dishwasher cycle to `Clean` and
    /// clears their estimates.
    ///
    /// Returns affected equipment IDs, ordered by ID. No-op when nothing
    /// is in the dishwasher.
    pub fn complete_dishwasher_cycle(&self) -> Vec<String> {
        let mut items = self.items.write().expect("equipment registry poisoned");
        let mut affected = Vec::new();

        for item in items.values_mut() {
            if item.status == EquipmentStatus::Dishwasher {
                apply_transition(item, EquipmentStatus::Clean);
                item.estimated_free = None;
                affected.push(item.id.clone());
            }
        }

        affected.sort();
        debug!(count = affected.len(), "dishwasher cycle completed");
        affected
    }
}

/// Applies a status transition, keeping `available_count` in
/// `[0, quantity]` with saturating arithmetic.
fn apply_transition(item: &mut Equipment, new_status: EquipmentStatus) {
    let was_clean = item.status == EquipmentStatus::Clean;
    match new_status {
        EquipmentStatus::Clean => {
            if !was_clean {
                item.available_count = (item.available_count + 1).min(item.quantity);
            }
        }
        _ => {
            if was_clean {
                item.available_count = item.available_count.saturating_sub(1);
            }
        }
    }
    item.status = new_status;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquipmentCategory;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn sample_registry() -> EquipmentRegistry {
        EquipmentRegistry::with_equipment(vec![
            Equipment::appliance("oven").with_name("Oven"),
            Equipment::cookware("pot").with_name("Stock Pot").with_quantity(2),
            Equipment::tool("knife").with_name("Chef's Knife"),
        ])
    }

    #[test]
    fn test_update_status_decrements_on_leaving_clean() {
        let registry = sample_registry();
        assert!(registry.update_status("oven", EquipmentStatus::InUse));
        let oven = registry.get("oven").unwrap();
        assert_eq!(oven.status, EquipmentStatus::InUse);
        assert_eq!(oven.available_count, 0);
    }

    #[test]
    fn test_update_status_increments_on_returning_clean() {
        let registry = sample_registry();
        registry.update_status("oven", EquipmentStatus::Dirty);
        registry.update_status("oven", EquipmentStatus::Clean);
        let oven = registry.get("oven").unwrap();
        assert_eq!(oven.available_count, 1);
    }

    #[test]
    fn test_unknown_id_returns_false() {
        let registry = sample_registry();
        assert!(!registry.update_status("wok", EquipmentStatus::Dirty));
    }

    #[test]
    fn test_available_count_never_exceeds_bounds() {
        let registry = sample_registry();
        // Repeated dirty transitions must not push the count below zero.
        for _ in 0..5 {
            registry.update_status("oven", EquipmentStatus::Dirty);
            registry.update_status("oven", EquipmentStatus::InUse);
        }
        assert_eq!(registry.get("oven").unwrap().available_count, 0);

        // Repeated clean transitions must not exceed quantity.
        for _ in 0..5 {
            registry.update_status("oven", EquipmentStatus::Clean);
            registry.update_status("oven", EquipmentStatus::Dirty);
        }
        registry.update_status("oven", EquipmentStatus::Clean);
        assert_eq!(registry.get("oven").unwrap().available_count, 1);
    }

    #[test]
    fn test_non_clean_to_non_clean_leaves_count_alone() {
        let registry = sample_registry();
        registry.update_status("pot", EquipmentStatus::InUse);
        let after_use = registry.get("pot").unwrap().available_count;
        registry.update_status("pot", EquipmentStatus::Dirty);
        assert_eq!(registry.get("pot").unwrap().available_count, after_use);
    }

    #[test]
    fn test_dishwasher_cycle_takes_dirty_cookware_and_tools() {
        let registry = sample_registry();
        registry.update_status("pot", EquipmentStatus::Dirty);
        registry.update_status("knife", EquipmentStatus::Dirty);
        registry.update_status("oven", EquipmentStatus::Dirty); // appliance, stays out

        let affected = registry.start_dishwasher_cycle(at(18, 0));
        assert_eq!(affected, vec!["knife", "pot"]);

        let pot = registry.get("pot").unwrap();
        assert_eq!(pot.status, EquipmentStatus::Dishwasher);
        assert_eq!(pot.estimated_free, Some(at(19, 0)));
        assert_eq!(
            registry.get("oven").unwrap().status,
            EquipmentStatus::Dirty
        );
    }

    #[test]
    fn test_dishwasher_cycle_idempotent_when_nothing_dirty() {
        let registry = sample_registry();
        assert!(registry.start_dishwasher_cycle(at(18, 0)).is_empty());
        assert!(registry.complete_dishwasher_cycle().is_empty());
    }

    #[test]
    fn test_complete_dishwasher_cycle_restores_clean() {
        let registry = sample_registry();
        registry.update_status("knife", EquipmentStatus::Dirty);
        registry.start_dishwasher_cycle(at(18, 0));

        let affected = registry.complete_dishwasher_cycle();
        assert_eq!(affected, vec!["knife"]);

        let knife = registry.get("knife").unwrap();
        assert_eq!(knife.status, EquipmentStatus::Clean);
        assert!(knife.estimated_free.is_none());
        assert_eq!(knife.available_count, 1);
    }

    #[test]
    fn test_available_filters_and_sorts() {
        let registry = sample_registry();
        registry.update_status("oven", EquipmentStatus::InUse);
        let free: Vec<String> = registry.available().into_iter().map(|e| e.id).collect();
        assert_eq!(free, vec!["knife", "pot"]);
    }

    #[test]
    fn test_in_status_query() {
        let registry = sample_registry();
        registry.update_status("pot", EquipmentStatus::Maintenance);
        let down = registry.in_status(EquipmentStatus::Maintenance);
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].id, "pot");
    }

    #[test]
    fn test_register_replaces_existing() {
        let registry = sample_registry();
        registry.register(
            Equipment::new("oven", EquipmentCategory::Appliance).with_quantity(2),
        );
        assert_eq!(registry.get("oven").unwrap().quantity, 2);
        assert_eq!(registry.len(), 3);
    }
}

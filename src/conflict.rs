//! Ex-post equipment conflict detection.
//!
//! Examines an arbitrary set of [`EquipmentUsage`] records — typically a
//! timeline the user rearranged by hand — and flags capacity violations.
//! This is deliberately separate from forward scheduling: the scheduler
//! always serializes contention away, while this detector audits an
//! already-committed usage set.
//!
//! # Algorithm
//!
//! Usages are grouped by equipment and sorted by start. For each usage,
//! later usages overlapping it (half-open `[start, end)`) are gathered;
//! a conflict fires only when the overlap count — the usage itself
//! included — exceeds the equipment's unit quantity. Pooled identical
//! units absorb overlap up to their count: two simultaneous uses of a
//! two-unit pot set are fine, three are not.
//!
//! Each conflict carries a delay-based resolution suggestion and a static
//! per-equipment list of substitutes (oven work can move to an air
//! fryer, and so on).

use std::collections::HashMap;

use crate::models::{Conflict, Equipment, EquipmentUsage};

/// Static substitution table: equipment ID -> alternatives.
const ALTERNATIVES: &[(&str, &[&str])] = &[
    ("oven", &["air-fryer", "toaster-oven"]),
    ("stove", &["electric-griddle", "instant-pot"]),
    ("microwave", &["oven", "stove"]),
    ("blender", &["food-processor", "immersion-blender"]),
    ("food-processor", &["blender", "box-grater"]),
    ("stand-mixer", &["hand-mixer", "whisk"]),
    ("rice-cooker", &["pot", "instant-pot"]),
];

/// Known substitutes for a piece of equipment. Empty for unlisted IDs.
pub fn alternatives_for(equipment_id: &str) -> Vec<String> {
    ALTERNATIVES
        .iter()
        .find(|(id, _)| *id == equipment_id)
        .map(|(_, alts)| alts.iter().map(|a| a.to_string()).collect())
        .unwrap_or_default()
}

/// Detects capacity violations in a usage set.
///
/// `equipment` supplies quantities and display names (typically a
/// registry snapshot). Usages referencing unknown equipment are audited
/// against a conservative quantity of 1 rather than rejected — the input
/// is externally edited data, not scheduler output.
pub fn detect_conflicts(usages: &[EquipmentUsage], equipment: &[Equipment]) -> Vec<Conflict> {
    let inventory: HashMap<&str, &Equipment> =
        equipment.iter().map(|e| (e.id.as_str(), e)).collect();

    // Group by equipment, preserving first-appearance order of IDs so
    // output order is deterministic.
    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&EquipmentUsage>> = HashMap::new();
    for usage in usages {
        let entry = groups.entry(usage.equipment_id.as_str()).or_default();
        if entry.is_empty() {
            group_order.push(usage.equipment_id.as_str());
        }
        entry.push(usage);
    }

    let mut conflicts = Vec::new();
    for eq_id in group_order {
        let mut group = groups.remove(eq_id).expect("group exists");
        group.sort_by_key(|u| u.start);

        let (quantity, name) = match inventory.get(eq_id) {
            Some(eq) => (eq.quantity.max(1) as usize, eq.name.clone()),
            None => (1, eq_id.to_string()),
        };

        for (i, usage) in group.iter().enumerate() {
            let overlapping: Vec<&EquipmentUsage> = group[i + 1..]
                .iter()
                .copied()
                .filter(|later| usage.overlaps(later))
                .collect();
            if overlapping.len() + 1 <= quantity {
                continue;
            }

            let next = overlapping[0];
            let delay_min = (usage.end - next.start).num_minutes().max(0);
            let mut bundle: Vec<EquipmentUsage> = Vec::with_capacity(overlapping.len() + 1);
            bundle.push((*usage).clone());
            bundle.extend(overlapping.iter().map(|u| (*u).clone()));

            conflicts.push(Conflict {
                equipment_id: eq_id.to_string(),
                equipment_name: name.clone(),
                usages: bundle,
                resolution: format!("delay '{}' by {} minutes", next.task_label, delay_min),
                alternatives: alternatives_for(eq_id),
            });
        }
    }

    conflicts
}

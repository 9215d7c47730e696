//! Cleaning buffer insertion pass.
//!
//! A post-pass over a built [`Timeline`] that enforces a minimum idle
//! gap between successive uses of the same equipment (scrub-down time
//! beyond the per-task cleaning window the forward scheduler already
//! holds). Tasks are only ever shifted later, never reordered; a shift
//! cascades to later tasks sharing the same equipment.
//!
//! The pass is idempotent: applying the same buffer twice produces no
//! further movement.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};

use crate::models::Timeline;

/// Re-walks a timeline, delaying tasks so each piece of equipment rests
/// at least `buffer_min` minutes between uses. Returns the adjusted
/// timeline with totals recomputed under the 10% buffer rule.
pub fn insert_cleaning_buffers(timeline: &Timeline, buffer_min: i64) -> Timeline {
    let buffer = Duration::minutes(buffer_min.max(0));
    let mut adjusted = timeline.clone();
    let mut last_used: HashMap<String, NaiveDateTime> = HashMap::new();

    for st in &mut adjusted.tasks {
        let mut required = st.start;
        for eq_id in &st.equipment {
            if let Some(&prev_end) = last_used.get(eq_id.as_str()) {
                required = required.max(prev_end + buffer);
            }
        }
        if required > st.start {
            let delta = required - st.start;
            st.start += delta;
            st.end += delta;
        }
        for eq_id in &st.equipment {
            last_used.insert(eq_id.clone(), st.end);
        }
    }

    adjusted.apply_buffer_rule();
    adjusted
}

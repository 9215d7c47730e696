//! Critical path analysis over the dependency DAG.
//!
//! Finds the longest duration-weighted root-to-leaf chain: roots are
//! tasks with no dependencies, leaves are tasks nothing depends on.
//! Weights are task durations only — cleaning time and actual scheduled
//! gaps are excluded, so the result is the theoretical unconstrained
//! critical path, independent of equipment contention.
//!
//! # Algorithm
//!
//! Exhaustive path enumeration by iterative depth-first search with an
//! explicit frame stack. Ties keep the first path found, which follows
//! declaration order (roots first, then dependents). Worst-case cost is
//! exponential in graph width; practical recipe graphs are tens of tasks,
//! and the depth guard bounds degenerate inputs.

use crate::error::ScheduleError;
use crate::graph::{TaskGraph, MAX_TRAVERSAL_DEPTH};
use crate::models::Task;

/// Finds the critical path, returned as ordered task names (root first).
///
/// Empty input yields an empty path. Tasks that are both root and leaf
/// form single-node paths and compete on their own duration.
///
/// # Errors
/// [`ScheduleError::UnknownTask`] for unresolved dependency references,
/// [`ScheduleError::DepthExceeded`] if enumeration outgrows the guard
/// (which also catches cyclic inputs reachable from a root).
pub fn find_critical_path(tasks: &[Task]) -> Result<Vec<String>, ScheduleError> {
    let graph = TaskGraph::build(tasks)?;
    critical_path_names(&graph)
}

/// Path enumeration over an already-built graph.
pub(crate) fn critical_path_names(graph: &TaskGraph) -> Result<Vec<String>, ScheduleError> {
    let dependents = graph.dependents_map();
    let mut best: Vec<String> = Vec::new();
    let mut best_sum: i64 = -1;

    for root in graph.roots() {
        // Frame: (task, next dependent to descend into).
        let mut stack: Vec<(&Task, usize)> = vec![(root, 0)];
        let mut sum = root.duration_min;

        while let Some(&mut (task, ref mut next)) = stack.last_mut() {
            let children: &[&str] = dependents
                .get(task.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            if *next < children.len() {
                let child = graph
                    .get(children[*next])
                    .expect("dependents map references known tasks");
                *next += 1;
                if stack.len() >= MAX_TRAVERSAL_DEPTH {
                    return Err(ScheduleError::DepthExceeded {
                        limit: MAX_TRAVERSAL_DEPTH,
                    });
                }
                sum += child.duration_min;
                stack.push((child, 0));
            } else {
                if children.is_empty() && sum > best_sum {
                    // First-found wins on ties: strictly-greater only.
                    best_sum = sum;
                    best = stack.iter().map(|(t, _)| t.name.clone()).collect();
                }
                sum -= task.duration_min;
                stack.pop();
            }
        }
    }

    Ok(best)
}

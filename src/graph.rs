//! Task dependency graph and cycle-safe topological ordering.
//!
//! Assembles a dependency graph from the tasks selected for a prep
//! session (merged recipe templates, deduplicated by task ID) and orders
//! them so every dependency precedes its dependents.
//!
//! # Algorithm
//!
//! Depth-first traversal with three-color marking (White = unvisited,
//! Gray = on the active path, Black = done). Reaching a Gray node means a
//! back edge, i.e. a cycle; the offending task is reported and the run
//! fails. The traversal is iterative with an explicit frame stack and a
//! depth guard, so degenerate inputs cannot overflow the call stack.
//!
//! Ties among independent tasks are broken by input declaration order.
//! This is the documented scheduling policy — not duration, not priority.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::HashMap;

use crate::error::ScheduleError;
use crate::models::Task;

/// Defensive bound on DFS stack depth for pathological inputs.
pub const MAX_TRAVERSAL_DEPTH: usize = 10_000;

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

/// A validated task dependency graph.
///
/// Construction deduplicates tasks by ID (first occurrence wins) and
/// resolves every dependency reference; unresolved references fail with
/// [`ScheduleError::UnknownTask`] before any traversal runs.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
}

impl TaskGraph {
    /// Builds a graph from a task collection.
    pub fn build(tasks: &[Task]) -> Result<Self, ScheduleError> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(tasks.len());
        let mut deduped: Vec<Task> = Vec::with_capacity(tasks.len());

        for task in tasks {
            if !index.contains_key(task.id.as_str()) {
                index.insert(task.id.clone(), deduped.len());
                deduped.push(task.clone());
            }
        }

        for task in &deduped {
            for dep in &task.dependencies {
                if !index.contains_key(dep.as_str()) {
                    return Err(ScheduleError::UnknownTask {
                        task_id: dep.clone(),
                        referenced_by: task.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            tasks: deduped,
            index,
        })
    }

    /// Tasks in declaration order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of distinct tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by ID.
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.index.get(task_id).map(|&i| &self.tasks[i])
    }

    /// Tasks with no dependencies, in declaration order.
    pub fn roots(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.dependencies.is_empty())
            .collect()
    }

    /// Dependency edges reversed: task ID -> dependents, both in
    /// declaration order.
    pub fn dependents_map(&self) -> HashMap<&str, Vec<&str>> {
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::with_capacity(self.tasks.len());
        for task in &self.tasks {
            for dep in &task.dependencies {
                dependents
                    .entry(dep.as_str())
                    .or_default()
                    .push(task.id.as_str());
            }
        }
        dependents
    }

    /// Returns tasks in topological order: every dependency before its
    /// dependents.
    ///
    /// # Errors
    /// [`ScheduleError::CycleDetected`] naming a task on the active
    /// traversal path, or [`ScheduleError::DepthExceeded`] if the DFS
    /// stack outgrows [`MAX_TRAVERSAL_DEPTH`].
    pub fn topological_order(&self) -> Result<Vec<&Task>, ScheduleError> {
        let n = self.tasks.len();
        let mut color = vec![Color::White; n];
        let mut order: Vec<usize> = Vec::with_capacity(n);

        for start in 0..n {
            if color[start] != Color::White {
                continue;
            }
            color[start] = Color::Gray;
            // Frame: (task index, next dependency to examine).
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

            while let Some(&mut (node, ref mut next)) = stack.last_mut() {
                let deps = &self.tasks[node].dependencies;
                if *next < deps.len() {
                    let dep_idx = self.index[deps[*next].as_str()];
                    *next += 1;
                    match color[dep_idx] {
                        Color::Gray => {
                            return Err(ScheduleError::CycleDetected {
                                task_id: self.tasks[dep_idx].id.clone(),
                            });
                        }
                        Color::White => {
                            if stack.len() >= MAX_TRAVERSAL_DEPTH {
                                return Err(ScheduleError::DepthExceeded {
                                    limit: MAX_TRAVERSAL_DEPTH,
                                });
                            }
                            color[dep_idx] = Color::Gray;
                            stack.push((dep_idx, 0));
                        }
                        Color::Black => {}
                    }
                } else {
                    // All dependencies emitted; the task itself follows.
                    color[node] = Color::Black;
                    order.push(node);
                    stack.pop();
                }
            }
        }

        Ok(order.into_iter().map(|i| &self.tasks[i]).collect())
    }
}

/// Orders a task collection topologically.
///
/// Convenience wrapper over [`TaskGraph::build`] +
/// [`TaskGraph::topological_order`] for callers that only need ordering.
pub fn topological_sort(tasks: &[Task]) -> Result<Vec<Task>, ScheduleError> {
    let graph = TaskGraph::build(tasks)?;
    Ok(graph
        .topological_order()?
        .into_iter()
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Vec<Task> {
        vec![
            Task::new("assemble").with_dependency("cook"),
            Task::new("cook").with_dependency("chop"),
            Task::new("chop"),
        ]
    }

    #[test]
    fn test_topological_order_respects_dependencies() {
        let order = topological_sort(&chain()).unwrap();
        let ids: Vec<&str> = order.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["chop", "cook", "assemble"]);
    }

    #[test]
    fn test_output_length_matches_input() {
        let tasks = chain();
        let order = topological_sort(&tasks).unwrap();
        assert_eq!(order.len(), tasks.len());
    }

    #[test]
    fn test_every_dependency_precedes_dependent() {
        let tasks = vec![
            Task::new("e").with_dependency("c").with_dependency("d"),
            Task::new("d").with_dependency("a"),
            Task::new("c").with_dependency("a").with_dependency("b"),
            Task::new("b"),
            Task::new("a"),
        ];
        let order = topological_sort(&tasks).unwrap();
        let pos: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();
        for task in &tasks {
            for dep in &task.dependencies {
                assert!(pos[dep.as_str()] < pos[task.id.as_str()]);
            }
        }
    }

    #[test]
    fn test_independent_tasks_keep_declaration_order() {
        let tasks = vec![Task::new("rice"), Task::new("beans"), Task::new("onions")];
        let order = topological_sort(&tasks).unwrap();
        let ids: Vec<&str> = order.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["rice", "beans", "onions"]);
    }

    #[test]
    fn test_mutual_dependency_is_a_cycle() {
        let tasks = vec![
            Task::new("a").with_dependency("b"),
            Task::new("b").with_dependency("a"),
        ];
        let err = topological_sort(&tasks).unwrap_err();
        match err {
            ScheduleError::CycleDetected { task_id } => {
                assert!(task_id == "a" || task_id == "b");
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let tasks = vec![Task::new("a").with_dependency("a")];
        assert!(matches!(
            topological_sort(&tasks),
            Err(ScheduleError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_unknown_dependency_rejected() {
        let tasks = vec![Task::new("a").with_dependency("ghost")];
        let err = topological_sort(&tasks).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::UnknownTask {
                task_id: "ghost".into(),
                referenced_by: "a".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_ids_first_occurrence_wins() {
        let tasks = vec![
            Task::new("rice").with_duration_min(30),
            Task::new("rice").with_duration_min(99),
        ];
        let graph = TaskGraph::build(&tasks).unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.get("rice").unwrap().duration_min, 30);
    }

    #[test]
    fn test_empty_input() {
        let order = topological_sort(&[]).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_dependents_map_declaration_order() {
        let graph = TaskGraph::build(&chain()).unwrap();
        let dependents = graph.dependents_map();
        assert_eq!(dependents["chop"], vec!["cook"]);
        assert_eq!(dependents["cook"], vec!["assemble"]);
        assert!(!dependents.contains_key("assemble"));
    }

    #[test]
    fn test_deep_chain_within_guard() {
        // 1000-task linear chain stays well under the depth bound.
        let mut tasks: Vec<Task> = vec![Task::new("t0")];
        for i in 1..1000 {
            tasks.push(Task::new(format!("t{i}")).with_dependency(format!("t{}", i - 1)));
        }
        let order = topological_sort(&tasks).unwrap();
        assert_eq!(order.len(), 1000);
        assert_eq!(order.first().unwrap().id, "t0");
        assert_eq!(order.last().unwrap().id, "t999");
    }
}

//! Dependency graph: adjacency in both directions plus cycle detection.

use crate::task::Task;

/// Adjacency view over one batch, keyed by positional id.
///
/// `depends_on` edges point from a task to the tasks it is blocked by;
/// `dependents` is the reverse relation (who is blocked by me) used for
/// fan-in scoring. Built once per batch; dangling dependency ids are dropped
/// here so downstream stages never see them. Kept separate from the task
/// records themselves so no back-pointers need to live inside `Task`.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    depends_on: Vec<Vec<usize>>,
    dependents: Vec<Vec<usize>>,
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

impl TaskGraph {
    pub fn build(tasks: &[Task]) -> Self {
        let n = tasks.len();
        let mut depends_on = vec![Vec::new(); n];
        let mut dependents = vec![Vec::new(); n];

        for task in tasks {
            for &dep in &task.dependencies {
                if dep >= n {
                    // Dangling reference: ignored, not an error.
                    continue;
                }
                if depends_on[task.id].contains(&dep) {
                    // Dependencies are a set: a repeated id counts once.
                    continue;
                }
                depends_on[task.id].push(dep);
                if dep != task.id {
                    // Fan-in counts *other* tasks only; a self-loop still
                    // keeps its forward edge so cycle detection flags it.
                    dependents[dep].push(task.id);
                }
            }
        }

        Self { depends_on, dependents }
    }

    pub fn len(&self) -> usize {
        self.depends_on.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depends_on.is_empty()
    }

    /// Number of other tasks blocked by `id`.
    pub fn fan_in(&self, id: usize) -> usize {
        self.dependents[id].len()
    }

    pub fn dependencies_of(&self, id: usize) -> &[usize] {
        &self.depends_on[id]
    }

    /// Flag every task that sits on a dependency cycle.
    ///
    /// Three-color depth-first search: white = unvisited, gray = on the
    /// current recursion stack, black = fully processed. Reaching a gray node
    /// again flags the stack segment from that node to the top. Runs once
    /// over the whole batch, O(V+E). A task that merely depends on a cycle
    /// member is not flagged.
    pub fn find_cycles(&self) -> Vec<bool> {
        let n = self.len();
        let mut color = vec![Color::White; n];
        let mut in_cycle = vec![false; n];
        // (node, index of the next outgoing edge to walk)
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut path: Vec<usize> = Vec::new();

        for root in 0..n {
            if color[root] != Color::White {
                continue;
            }
            color[root] = Color::Gray;
            stack.push((root, 0));
            path.push(root);

            while let Some((node, edge)) = stack.last().copied() {
                if edge < self.depends_on[node].len() {
                    if let Some(frame) = stack.last_mut() {
                        frame.1 += 1;
                    }
                    let next = self.depends_on[node][edge];
                    match color[next] {
                        Color::White => {
                            color[next] = Color::Gray;
                            stack.push((next, 0));
                            path.push(next);
                        }
                        Color::Gray => {
                            // Back edge: everything from `next` up to the top
                            // of the path is on the cycle.
                            let start = path.iter().position(|&p| p == next).unwrap_or(0);
                            for &p in &path[start..] {
                                in_cycle[p] = true;
                            }
                        }
                        Color::Black => {}
                    }
                } else {
                    color[node] = Color::Black;
                    stack.pop();
                    path.pop();
                }
            }
        }

        in_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskInput, validate_batch};
    use chrono::NaiveDate;

    fn batch(deps: &[&[usize]]) -> Vec<Task> {
        let inputs: Vec<TaskInput> = deps
            .iter()
            .enumerate()
            .map(|(i, d)| TaskInput {
                title: format!("task {i}"),
                due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                estimated_hours: 1.0,
                importance: 5,
                dependencies: d.to_vec(),
            })
            .collect();
        validate_batch(&inputs).unwrap()
    }

    #[test]
    fn test_reverse_adjacency_counts_dependents() {
        let tasks = batch(&[&[], &[0], &[0]]);
        let graph = TaskGraph::build(&tasks);
        assert_eq!(graph.fan_in(0), 2);
        assert_eq!(graph.fan_in(1), 0);
        assert_eq!(graph.fan_in(2), 0);
    }

    #[test]
    fn test_repeated_dependency_ids_count_once() {
        let tasks = batch(&[&[], &[0, 0, 0]]);
        let graph = TaskGraph::build(&tasks);
        assert_eq!(graph.fan_in(0), 1);
        assert_eq!(graph.dependencies_of(1), &[0]);
    }

    #[test]
    fn test_dangling_references_dropped() {
        let tasks = batch(&[&[7, 1], &[]]);
        let graph = TaskGraph::build(&tasks);
        assert_eq!(graph.dependencies_of(0), &[1]);
        assert_eq!(graph.fan_in(1), 1);
    }

    #[test]
    fn test_three_cycle_flagged() {
        // 0 -> 1 -> 2 -> 0
        let tasks = batch(&[&[1], &[2], &[0]]);
        let flags = TaskGraph::build(&tasks).find_cycles();
        assert_eq!(flags, vec![true, true, true]);
    }

    #[test]
    fn test_dependent_on_cycle_not_flagged() {
        // 0 -> 1 -> 2 -> 0, plus 3 -> 0 outside the loop.
        let tasks = batch(&[&[1], &[2], &[0], &[0]]);
        let flags = TaskGraph::build(&tasks).find_cycles();
        assert_eq!(flags, vec![true, true, true, false]);
    }

    #[test]
    fn test_dag_has_no_cycles() {
        let tasks = batch(&[&[], &[0], &[0, 1], &[2]]);
        let flags = TaskGraph::build(&tasks).find_cycles();
        assert!(flags.iter().all(|&f| !f));
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let tasks = batch(&[&[0], &[]]);
        let flags = TaskGraph::build(&tasks).find_cycles();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_two_separate_cycles() {
        // 0 <-> 1 and 2 <-> 3, with 4 clean.
        let tasks = batch(&[&[1], &[0], &[3], &[2], &[]]);
        let flags = TaskGraph::build(&tasks).find_cycles();
        assert_eq!(flags, vec![true, true, true, true, false]);
    }
}

//! Analysis pipeline: validate, detect cycles, score, rank, suggest.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;
use crate::graph::TaskGraph;
use crate::scoring;
use crate::strategy::Strategy;
use crate::task::{ScoredTask, TaskInput, validate_batch};
use crate::time::DayCount;

/// Explanation used for every cycle member, replacing its factor summary.
pub const CYCLE_EXPLANATION: &str = "⚠️ Circular dependency detected - needs resolution";

const SUGGESTION_COUNT: usize = 3;

/// Ranked batch returned by [`Analyzer::analyze`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    /// Sorted by priority score descending; ties keep input order.
    pub tasks: Vec<ScoredTask>,
    pub strategy_used: String,
}

/// Top picks returned by [`Analyzer::suggest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestions {
    /// At most three tasks, highest priority first.
    pub suggested_tasks: Vec<ScoredTask>,
    pub total_tasks_analyzed: usize,
}

/// Liveness probe record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

pub fn health() -> Health {
    Health { status: "ok" }
}

/// One analysis pass over a batch.
///
/// Request-scoped: every call builds its own graph and scratch state, so the
/// engine is naturally re-entrant and callers never share anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    pub strategy: Strategy,
    pub day_count: DayCount,
}

impl Analyzer {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            day_count: DayCount::Calendar,
        }
    }

    pub fn with_day_count(mut self, day_count: DayCount) -> Self {
        self.day_count = day_count;
        self
    }

    /// Score and rank a batch against the injected reference date.
    ///
    /// Cycle members still flow through the pipeline but their computed
    /// factor scores are discarded in favor of a fixed 0.
    pub fn analyze(&self, inputs: &[TaskInput], today: NaiveDate) -> Result<Analysis, AnalyzeError> {
        let tasks = validate_batch(inputs)?;
        let graph = TaskGraph::build(&tasks);
        let in_cycle = graph.find_cycles();

        let curve = self.strategy.effort_curve();
        let weights = self.strategy.weights();

        let mut scored: Vec<ScoredTask> = tasks
            .iter()
            .map(|task| {
                if in_cycle[task.id] {
                    return task.scored(0.0, CYCLE_EXPLANATION.to_string(), true);
                }
                let factors = scoring::score_factors(task, &graph, today, curve, self.day_count);
                task.scored(
                    scoring::combine(factors, weights),
                    scoring::explain(task, factors, today, self.day_count),
                    false,
                )
            })
            .collect();

        // Stable sort keeps input order on equal scores.
        scored.sort_by(|a, b| {
            b.priority_score
                .partial_cmp(&a.priority_score)
                .unwrap_or(Ordering::Equal)
        });

        Ok(Analysis {
            tasks: scored,
            strategy_used: self.strategy.name().to_string(),
        })
    }

    /// Top three of the ranking. A read-only view of [`Self::analyze`], not a
    /// second scoring pass.
    pub fn suggest(&self, inputs: &[TaskInput], today: NaiveDate) -> Result<Suggestions, AnalyzeError> {
        let analysis = self.analyze(inputs, today)?;
        let mut suggested_tasks = analysis.tasks;
        suggested_tasks.truncate(SUGGESTION_COUNT);
        Ok(Suggestions {
            suggested_tasks,
            total_tasks_analyzed: inputs.len(),
        })
    }
}

/// Collaborator entry point: rank `tasks` under the named strategy.
pub fn analyze(
    inputs: &[TaskInput],
    strategy: &str,
    today: NaiveDate,
) -> Result<Analysis, AnalyzeError> {
    let strategy: Strategy = strategy.parse()?;
    Analyzer::new(strategy).analyze(inputs, today)
}

/// Collaborator entry point: top-3 suggestions under the default strategy.
pub fn suggest(inputs: &[TaskInput], today: NaiveDate) -> Result<Suggestions, AnalyzeError> {
    Analyzer::default().suggest(inputs, today)
}

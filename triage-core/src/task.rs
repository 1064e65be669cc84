//! Task records: raw input, validated tasks, and scored output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

/// Raw task record as supplied by the caller.
///
/// Any client-supplied id is ignored: tasks are re-keyed by their position in
/// the batch, so dependency ids always refer to batch indices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskInput {
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    /// 1-10, higher matters more.
    pub importance: i32,
    /// Batch indices of tasks this one is blocked by.
    #[serde(default)]
    pub dependencies: Vec<usize>,
}

/// Validated task with its zero-based positional id assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: usize,
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: i32,
    pub dependencies: Vec<usize>,
}

/// Task plus scoring output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredTask {
    pub id: usize,
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: i32,
    pub dependencies: Vec<usize>,
    /// Non-negative; unbounded above for severely overdue tasks.
    pub priority_score: f64,
    pub explanation: String,
    pub in_cycle: bool,
}

impl Task {
    pub fn scored(&self, priority_score: f64, explanation: String, in_cycle: bool) -> ScoredTask {
        ScoredTask {
            id: self.id,
            title: self.title.clone(),
            due_date: self.due_date,
            estimated_hours: self.estimated_hours,
            importance: self.importance,
            dependencies: self.dependencies.clone(),
            priority_score,
            explanation,
            in_cycle,
        }
    }
}

/// Validate a batch and assign positional ids.
///
/// The batch is atomic: the first invalid record rejects the whole call, and
/// the error names the offending field and task index.
pub fn validate_batch(inputs: &[TaskInput]) -> Result<Vec<Task>, AnalyzeError> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, raw)| validate_one(index, raw))
        .collect()
}

fn validate_one(index: usize, raw: &TaskInput) -> Result<Task, AnalyzeError> {
    if raw.title.trim().is_empty() {
        return Err(AnalyzeError::Validation {
            index,
            field: "title",
            message: "must not be empty".to_string(),
        });
    }
    if !raw.estimated_hours.is_finite() || raw.estimated_hours <= 0.0 {
        return Err(AnalyzeError::Validation {
            index,
            field: "estimated_hours",
            message: format!("must be positive, got {}", raw.estimated_hours),
        });
    }
    if !(1..=10).contains(&raw.importance) {
        return Err(AnalyzeError::Validation {
            index,
            field: "importance",
            message: format!("must be within 1-10, got {}", raw.importance),
        });
    }

    Ok(Task {
        id: index,
        title: raw.title.clone(),
        due_date: raw.due_date,
        estimated_hours: raw.estimated_hours,
        importance: raw.importance,
        dependencies: raw.dependencies.clone(),
    })
}

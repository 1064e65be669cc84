//! triage-core: priority scoring engine for task batches
//!
//! One call takes a batch of task records plus a strategy name and produces a
//! deterministic ranking: per-task priority scores, human-readable
//! explanations, top-3 suggestions, and circular-dependency warnings. All
//! state is request-scoped; nothing persists across calls.

pub mod analyzer;
pub mod error;
pub mod graph;
pub mod scoring;
pub mod strategy;
pub mod task;
pub mod time;

pub use analyzer::{Analysis, Analyzer, Health, Suggestions, analyze, health, suggest};
pub use error::AnalyzeError;
pub use graph::TaskGraph;
pub use scoring::{FactorScores, effort_score, fan_in_score, importance_score, urgency_score};
pub use strategy::{EffortCurve, Strategy, Weights};
pub use task::{ScoredTask, Task, TaskInput};
pub use time::{DayCount, business_days_between, days_until, today_in_tz};

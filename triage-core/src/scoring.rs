//! Factor scorers and the strategy combiner.
//!
//! Each scorer is a pure function of a task and an injected reference date;
//! nothing here reads the wall clock or mutates shared state. Cycle handling
//! is the caller's job: scorers assume a DAG because flagged tasks have their
//! factor scores discarded upstream.

use chrono::NaiveDate;

use crate::graph::TaskGraph;
use crate::strategy::{EffortCurve, Weights};
use crate::task::Task;
use crate::time::{DayCount, days_until, is_weekend};

/// Raw per-factor scores for one task, before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

/// Urgency from due-date proximity.
///
/// Overdue grows without bound at 10 points per day past due; future dates
/// step down through fixed bands and bottom out at 10 for distant deadlines.
/// Band boundaries belong to the lower-day band (day 3 scores 80, day 4
/// scores 75). In business-day mode a weekend due date adds +10, except when
/// already overdue.
pub fn urgency_score(due: NaiveDate, today: NaiveDate, mode: DayCount) -> f64 {
    let days = days_until(due, today, mode);
    if days < 0 {
        return 100.0 + 10.0 * days.unsigned_abs() as f64;
    }

    let weekend_boost = if mode == DayCount::Business && is_weekend(due) {
        10.0
    } else {
        0.0
    };

    let base = match days {
        0 => 95.0,
        1..=3 => 90.0 - (days - 1) as f64 * 5.0,
        4..=7 => 75.0 - (days - 4) as f64 * 5.0,
        8..=14 => 55.0 - (days - 8) as f64 * 2.5,
        // Clamped: never extrapolate below 10 for very distant dates.
        _ => (35.0 - (days - 14) as f64 * 1.5).max(10.0),
    };
    base + weekend_boost
}

/// Linear rescale of the 1-10 importance rating to 10-100.
pub fn importance_score(importance: i32) -> f64 {
    f64::from(importance * 10)
}

/// Effort score from estimated hours under the strategy's curve.
pub fn effort_score(hours: f64, curve: EffortCurve) -> f64 {
    match curve {
        EffortCurve::Fastest => {
            if hours <= 1.0 {
                90.0
            } else if hours <= 3.0 {
                70.0
            } else if hours <= 8.0 {
                50.0
            } else {
                30.0
            }
        }
        EffortCurve::Standard => {
            if hours <= 2.0 {
                70.0
            } else if hours <= 5.0 {
                80.0
            } else if hours <= 10.0 {
                60.0
            } else {
                40.0
            }
        }
    }
}

/// Dependency fan-in score: 20 points per task blocked by this one, capped
/// at 100.
pub fn fan_in_score(dependents: usize) -> f64 {
    ((dependents * 20) as f64).min(100.0)
}

/// Compute all four raw factor scores for one task.
pub fn score_factors(
    task: &Task,
    graph: &TaskGraph,
    today: NaiveDate,
    curve: EffortCurve,
    mode: DayCount,
) -> FactorScores {
    FactorScores {
        urgency: urgency_score(task.due_date, today, mode),
        importance: importance_score(task.importance),
        effort: effort_score(task.estimated_hours, curve),
        dependency: fan_in_score(graph.fan_in(task.id)),
    }
}

/// Weighted sum of the four factors. No rounding here; presentation rounding
/// belongs to the caller.
pub fn combine(factors: FactorScores, weights: Weights) -> f64 {
    factors.urgency * weights.urgency
        + factors.importance * weights.importance
        + factors.effort * weights.effort
        + factors.dependency * weights.dependency
}

/// Human-readable summary of the dominant factors. Descriptive only; has no
/// effect on ranking.
pub fn explain(task: &Task, factors: FactorScores, today: NaiveDate, mode: DayCount) -> String {
    let mut reasons: Vec<String> = Vec::new();

    let days = days_until(task.due_date, today, mode);
    let day_word = match mode {
        DayCount::Business => "business days",
        DayCount::Calendar => "days",
    };
    let weekend_marker = if mode == DayCount::Business && is_weekend(task.due_date) {
        " 📅"
    } else {
        ""
    };

    if days < 0 {
        reasons.push(format!("🔴 OVERDUE by {} {day_word}{weekend_marker}", -days));
    } else if days == 0 {
        reasons.push(format!("🔴 Due TODAY{weekend_marker}"));
    } else if days <= 3 {
        reasons.push(format!("🟡 Due in {days} {day_word}{weekend_marker}"));
    } else if days <= 7 {
        reasons.push(format!("🟢 Due this week{weekend_marker}"));
    }

    if task.importance >= 8 {
        reasons.push(format!("⭐ High importance ({}/10)", task.importance));
    } else if task.importance >= 5 {
        reasons.push(format!("Medium importance ({}/10)", task.importance));
    }

    if task.estimated_hours <= 2.0 {
        reasons.push(format!("⚡ Quick task ({}h)", task.estimated_hours));
    } else if task.estimated_hours >= 10.0 {
        reasons.push(format!("📊 Large task ({}h)", task.estimated_hours));
    }

    if factors.dependency > 0.0 {
        reasons.push("🔗 Blocks other tasks".to_string());
    }

    if reasons.is_empty() {
        "Standard priority".to_string()
    } else {
        reasons.join(" | ")
    }
}

//! End-to-end runs over JSON task batches, exercising the same records a
//! caller would deserialize.

use chrono::NaiveDate;
use triage_core::{AnalyzeError, Analyzer, DayCount, Strategy, TaskInput, analyze, suggest};

fn today() -> NaiveDate {
    // Monday.
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn sample_batch() -> Vec<TaskInput> {
    serde_json::from_str(
        r#"[
            {"title": "Fix critical bug", "due_date": "2026-03-02", "estimated_hours": 2.0, "importance": 9},
            {"title": "Write documentation", "due_date": "2026-03-09", "estimated_hours": 5.0, "importance": 5},
            {"title": "Overdue task", "due_date": "2026-02-28", "estimated_hours": 3.0, "importance": 7}
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_scores_sorted_descending() {
    let analysis = analyze(&sample_batch(), "smart_balance", today()).unwrap();
    assert_eq!(analysis.tasks.len(), 3);

    let scores: Vec<f64> = analysis.tasks.iter().map(|t| t.priority_score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(scores, sorted);
}

#[test]
fn test_strategies_disagree_on_ordering() {
    let batch: Vec<TaskInput> = serde_json::from_str(
        r#"[
            {"title": "Tiny chore", "due_date": "2026-03-20", "estimated_hours": 0.5, "importance": 3},
            {"title": "Big launch", "due_date": "2026-03-20", "estimated_hours": 12.0, "importance": 10},
            {"title": "Deadline crunch", "due_date": "2026-03-03", "estimated_hours": 6.0, "importance": 4}
        ]"#,
    )
    .unwrap();

    let fastest = analyze(&batch, "fastest_wins", today()).unwrap();
    let impact = analyze(&batch, "high_impact", today()).unwrap();
    let deadline = analyze(&batch, "deadline_driven", today()).unwrap();

    assert_eq!(fastest.tasks[0].title, "Tiny chore");
    assert_eq!(impact.tasks[0].title, "Big launch");
    assert_eq!(deadline.tasks[0].title, "Deadline crunch");
}

#[test]
fn test_cycle_batch_still_returns_successfully() {
    let batch: Vec<TaskInput> = serde_json::from_str(
        r#"[
            {"title": "Task A", "due_date": "2026-03-02", "estimated_hours": 2.0, "importance": 5, "dependencies": [2]},
            {"title": "Task B", "due_date": "2026-03-02", "estimated_hours": 2.0, "importance": 5, "dependencies": [0]},
            {"title": "Task C", "due_date": "2026-03-02", "estimated_hours": 2.0, "importance": 5, "dependencies": [1]}
        ]"#,
    )
    .unwrap();

    let analysis = analyze(&batch, "smart_balance", today()).unwrap();
    assert!(analysis.tasks.iter().all(|t| t.in_cycle));
    assert!(analysis.tasks.iter().all(|t| t.priority_score == 0.0));
}

#[test]
fn test_blocking_task_outranks_equal_twin() {
    let batch: Vec<TaskInput> = serde_json::from_str(
        r#"[
            {"title": "Blocking task", "due_date": "2026-03-05", "estimated_hours": 2.0, "importance": 5},
            {"title": "Loner task", "due_date": "2026-03-05", "estimated_hours": 2.0, "importance": 5},
            {"title": "Dependent 1", "due_date": "2026-03-10", "estimated_hours": 2.0, "importance": 5, "dependencies": [0]},
            {"title": "Dependent 2", "due_date": "2026-03-10", "estimated_hours": 2.0, "importance": 5, "dependencies": [0]}
        ]"#,
    )
    .unwrap();

    let analysis = analyze(&batch, "smart_balance", today()).unwrap();
    let blocking = analysis.tasks.iter().position(|t| t.title == "Blocking task").unwrap();
    let loner = analysis.tasks.iter().position(|t| t.title == "Loner task").unwrap();
    assert!(blocking < loner);

    let top = &analysis.tasks[blocking];
    assert!(top.explanation.contains("🔗 Blocks other tasks"), "{}", top.explanation);
}

#[test]
fn test_duplicate_dependency_ids_count_one_dependent() {
    // The dependent lists task 0 twice; fan-in is a count of tasks, not of
    // edges, so task 0 gets 20 dependency points, not 40.
    let batch: Vec<TaskInput> = serde_json::from_str(
        r#"[
            {"title": "Release build", "due_date": "2026-03-05", "estimated_hours": 2.0, "importance": 5},
            {"title": "Announce release", "due_date": "2026-03-10", "estimated_hours": 1.0, "importance": 5, "dependencies": [0, 0]}
        ]"#,
    )
    .unwrap();

    let analysis = analyze(&batch, "smart_balance", today()).unwrap();
    let blocking = analysis.tasks.iter().find(|t| t.id == 0).unwrap();
    // urgency 80, importance 50, effort 70, dependency 20:
    // 80*.35 + 50*.30 + 70*.20 + 20*.15 = 60
    assert!(
        (blocking.priority_score - 60.0).abs() < 1e-9,
        "got {}",
        blocking.priority_score
    );
}

#[test]
fn test_suggest_uses_default_strategy() {
    let batch = sample_batch();
    let s = suggest(&batch, today()).unwrap();
    let analysis = analyze(&batch, "smart_balance", today()).unwrap();
    assert_eq!(s.suggested_tasks, analysis.tasks);
    assert_eq!(s.total_tasks_analyzed, 3);
}

#[test]
fn test_malformed_fields_reject_whole_batch() {
    let mut batch = sample_batch();
    batch.push(TaskInput {
        title: "negative hours".to_string(),
        due_date: today(),
        estimated_hours: -1.5,
        importance: 5,
        dependencies: vec![],
    });

    let err = analyze(&batch, "smart_balance", today()).unwrap_err();
    assert!(matches!(
        err,
        AnalyzeError::Validation { index: 3, field: "estimated_hours", .. }
    ));
}

#[test]
fn test_business_day_mode_shifts_urgency() {
    // Due the following Monday: 7 calendar days but 5 business days out.
    let batch: Vec<TaskInput> = serde_json::from_str(
        r#"[{"title": "Weekly report", "due_date": "2026-03-09", "estimated_hours": 1.0, "importance": 5}]"#,
    )
    .unwrap();

    let calendar = Analyzer::new(Strategy::DeadlineDriven)
        .analyze(&batch, today())
        .unwrap();
    let business = Analyzer::new(Strategy::DeadlineDriven)
        .with_day_count(DayCount::Business)
        .analyze(&batch, today())
        .unwrap();

    // Calendar: day 7 -> urgency 60. Business: day 5 -> urgency 70.
    assert!(business.tasks[0].priority_score > calendar.tasks[0].priority_score);
}

#[test]
fn test_business_day_mode_labels_overdue_days() {
    // Due the previous Friday: 3 calendar days late, 1 business day late.
    let batch: Vec<TaskInput> = serde_json::from_str(
        r#"[{"title": "Late report", "due_date": "2026-02-27", "estimated_hours": 1.0, "importance": 5}]"#,
    )
    .unwrap();

    let calendar = Analyzer::default().analyze(&batch, today()).unwrap();
    let business = Analyzer::default()
        .with_day_count(DayCount::Business)
        .analyze(&batch, today())
        .unwrap();

    assert!(calendar.tasks[0].explanation.contains("OVERDUE by 3 days"));
    assert!(business.tasks[0].explanation.contains("OVERDUE by 1 business days"));
}

#[test]
fn test_serialized_response_shape() {
    let analysis = analyze(&sample_batch(), "high_impact", today()).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["strategy_used"], "high_impact");
    let first = &json["tasks"][0];
    assert!(first["priority_score"].is_f64());
    assert!(first["explanation"].is_string());
    assert_eq!(first["in_cycle"], false);
}

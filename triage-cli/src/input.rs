//! Load task batches from JSON or CSV files.
//!
//! CSV layout: `title,due_date,estimated_hours,importance,dependencies` with
//! dependency ids separated by `;` in the last column.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Read;
use std::path::Path;

use triage_core::TaskInput;

pub fn load_tasks(path: &Path) -> Result<Vec<TaskInput>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => {
            let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            load_csv(file).with_context(|| format!("parsing {}", path.display()))
        }
        _ => bail!(
            "unsupported task file (expected .json or .csv): {}",
            path.display()
        ),
    }
}

fn load_json(path: &Path) -> Result<Vec<TaskInput>> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

fn load_csv(reader: impl Read) -> Result<Vec<TaskInput>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut tasks = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let line = row + 2; // 1-based, after the header

        let title = record.get(0).unwrap_or("").trim().to_string();
        let due_date = record
            .get(1)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("line {line}: bad due_date (expected YYYY-MM-DD)"))?;
        let estimated_hours = record
            .get(2)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("line {line}: bad estimated_hours"))?;
        let importance = record
            .get(3)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("line {line}: bad importance"))?;
        let dependencies = parse_deps(record.get(4).unwrap_or(""))
            .with_context(|| format!("line {line}: bad dependencies"))?;

        tasks.push(TaskInput {
            title,
            due_date,
            estimated_hours,
            importance,
            dependencies,
        });
    }
    Ok(tasks)
}

fn parse_deps(raw: &str) -> Result<Vec<usize>> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("dependency id {s:?} is not an index"))
        })
        .collect()
}

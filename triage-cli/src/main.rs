use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use triage_core::{Analyzer, DayCount, ScoredTask, Strategy, health, today_in_tz};

mod config;
mod input;

#[derive(Parser, Debug)]
#[command(name = "triage", version, about = "Task priority analyzer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank a task batch by priority score
    Analyze {
        /// Task batch file (.json array or .csv)
        #[arg(long)]
        file: PathBuf,

        /// smart_balance, fastest_wins, high_impact, or deadline_driven
        #[arg(long)]
        strategy: Option<String>,

        #[command(flatten)]
        date: DateArgs,

        /// Count business days (weekdays minus US federal holidays)
        #[arg(long)]
        business_days: bool,

        /// Print the raw JSON response instead of the table
        #[arg(long)]
        json: bool,

        /// Limit number of tasks printed
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Suggest the top 3 tasks to work on today
    Suggest {
        /// Task batch file (.json array or .csv)
        #[arg(long)]
        file: PathBuf,

        #[command(flatten)]
        date: DateArgs,

        /// Count business days (weekdays minus US federal holidays)
        #[arg(long)]
        business_days: bool,

        /// Print the raw JSON response instead of the table
        #[arg(long)]
        json: bool,
    },

    /// List the built-in strategy profiles and their weights
    Strategies,

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Liveness probe
    Health,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default ~/.triage/config.toml
    Init,
    /// Print the effective config
    Show,
}

#[derive(Args, Debug)]
struct DateArgs {
    /// Reference date (YYYY-MM-DD); defaults to today in --tz
    #[arg(long)]
    today: Option<NaiveDate>,

    /// IANA timezone used to resolve today
    #[arg(long, default_value = "UTC")]
    tz: String,
}

impl DateArgs {
    fn resolve(&self) -> Result<NaiveDate> {
        match self.today {
            Some(d) => Ok(d),
            None => today_in_tz(&self.tz),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Analyze {
            file,
            strategy,
            date,
            business_days,
            json,
            limit,
        } => {
            let tasks = input::load_tasks(&file)?;
            if tasks.is_empty() {
                bail!("no tasks in {}", file.display());
            }

            let name = strategy.unwrap_or_else(|| cfg.analyze.strategy.clone());
            let strategy: Strategy = name.parse()?;
            let today = date.resolve()?;
            let analyzer = Analyzer::new(strategy).with_day_count(day_count(business_days, &cfg));

            let analysis = analyzer.analyze(&tasks, today)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!(
                    "Strategy: {} | {} tasks | today = {today}\n",
                    analysis.strategy_used,
                    analysis.tasks.len()
                );
                let shown = limit.unwrap_or(analysis.tasks.len());
                for (rank, task) in analysis.tasks.iter().take(shown).enumerate() {
                    print_task(rank + 1, task);
                }
            }
        }

        Command::Suggest {
            file,
            date,
            business_days,
            json,
        } => {
            let tasks = input::load_tasks(&file)?;
            if tasks.is_empty() {
                bail!("no tasks in {}", file.display());
            }

            let today = date.resolve()?;
            let suggestions = Analyzer::default()
                .with_day_count(day_count(business_days, &cfg))
                .suggest(&tasks, today)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                println!(
                    "Top {} of {} tasks analyzed\n",
                    suggestions.suggested_tasks.len(),
                    suggestions.total_tasks_analyzed
                );
                for (rank, task) in suggestions.suggested_tasks.iter().enumerate() {
                    print_task(rank + 1, task);
                }
            }
        }

        Command::Strategies => {
            for strategy in Strategy::ALL {
                let w = strategy.weights();
                println!(
                    "{:<16} urgency={:.2} importance={:.2} effort={:.2} dependency={:.2}",
                    strategy.name(),
                    w.urgency,
                    w.importance,
                    w.effort,
                    w.dependency
                );
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("{}", toml::to_string_pretty(&cfg)?);
            }
        },

        Command::Health => {
            println!("{}", serde_json::to_string(&health())?);
        }
    }

    Ok(())
}

fn day_count(business_days_flag: bool, cfg: &config::Config) -> DayCount {
    if business_days_flag || cfg.analyze.business_days {
        DayCount::Business
    } else {
        DayCount::Calendar
    }
}

fn print_task(rank: usize, task: &ScoredTask) {
    println!(
        "{rank:>2}. [{:>7.2}] {} (due {}, {}h, importance {})",
        task.priority_score, task.title, task.due_date, task.estimated_hours, task.importance
    );
    println!("      {}", task.explanation);
}

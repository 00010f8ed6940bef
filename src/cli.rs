//! Command-line front end over the [`Store`].

use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use chrono::{Local, Timelike};
use clap::{Parser, Subcommand};

use crate::dashboard::{DashboardStats, Greeting, Motivation};
use crate::model::{NewTask, Task, TaskId, TaskPatch};
use crate::store::{Mutation, Store, View};

/// Tasks shown in the dashboard's recent list.
const RECENT_TASKS: usize = 3;

#[derive(Debug, Parser)]
#[command(name = "dreamtasks", version, about = "Personal task tracker")]
pub struct Cli {
    /// Config file (default: <config dir>/dreamtasks/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List tasks, optionally filtered
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Mark a task as completed
    Done { id: TaskId },
    /// Delete a task
    Remove { id: TaskId },
    /// Show motivational quotes
    Quotes,
    /// Show progress summary
    Dashboard,
}

impl Command {
    fn needs_quotes(&self) -> bool {
        matches!(self, Self::Quotes | Self::Dashboard)
    }
}

/// Restore state, run `command` against `store` and print the result.
pub async fn run(store: &Store, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    if command.needs_quotes() {
        store.load_initial_data().await;
    } else if let Err(error) = store.load_tasks() {
        bail!("Failed to load tasks: {}", error);
    }
    if let Some(error) = store.snapshot().error {
        bail!("Failed to load tasks: {}", error);
    }

    match command {
        Command::Add { title, description } => {
            let mut new = NewTask::new(title);
            new.description = description;
            let added = store.add_task(new);
            ensure_saved(&added)?;
            writeln!(out, "Added task {}: {}", added.value.id, added.value.title)?;
        }
        Command::List { search } => {
            store.set_current_view(View::Tasks);
            store.set_search_query(search.unwrap_or_default());
            let state = store.snapshot();
            let tasks = state.filtered_tasks();
            if tasks.is_empty() {
                writeln!(out, "No tasks")?;
            }
            for task in tasks {
                write_task(out, task)?;
            }
        }
        Command::Done { id } => {
            let Some(updated) = store.update_task(id, TaskPatch::completed(true)) else {
                bail!("Task {} not found", id);
            };
            ensure_saved(&updated)?;
            writeln!(out, "Completed task {}: {}", id, updated.value.title)?;
        }
        Command::Remove { id } => {
            let removed = store.delete_task(id);
            ensure_saved(&removed)?;
            if removed.value {
                writeln!(out, "Removed task {}", id)?;
            } else {
                writeln!(out, "No task with id {}", id)?;
            }
        }
        Command::Quotes => {
            store.set_current_view(View::Quotes);
            let state = store.snapshot();
            if state.quotes.is_empty() {
                writeln!(out, "No quotes available")?;
            }
            for quote in &state.quotes {
                writeln!(out, "\"{}\" - {}", quote.content, quote.author)?;
            }
        }
        Command::Dashboard => {
            store.set_current_view(View::Dashboard);
            let state = store.snapshot();
            let stats = DashboardStats::from_tasks(&state.tasks);
            let greeting = Greeting::for_hour(Local::now().hour());

            writeln!(out, "{}, {}!", greeting.message(), state.user.name)?;
            writeln!(out, "{}", Motivation::for_stats(&stats).message())?;
            writeln!(
                out,
                "Total: {}  Completed: {}  Pending: {}  ({}%)",
                stats.total, stats.completed, stats.pending, stats.completion_rate
            )?;
            for task in state.recent_tasks(RECENT_TASKS) {
                write_task(out, task)?;
            }
            if let Some(quote) = state.featured_quote() {
                writeln!(out, "\"{}\" - {}", quote.content, quote.author)?;
            }
        }
    }
    Ok(())
}

fn write_task(out: &mut impl Write, task: &Task) -> std::io::Result<()> {
    let mark = if task.completed { 'x' } else { ' ' };
    match &task.description {
        Some(description) => writeln!(out, "[{}] {} {}: {}", mark, task.id, task.title, description),
        None => writeln!(out, "[{}] {} {}", mark, task.id, task.title),
    }
}

fn ensure_saved<T>(mutation: &Mutation<T>) -> anyhow::Result<()> {
    if mutation.is_persisted() {
        return Ok(());
    }
    bail!(
        "Failed to save tasks: {}",
        mutation.persisted.error.as_deref().unwrap_or("unknown error")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_description() {
        let cli = Cli::try_parse_from(["dreamtasks", "add", "Buy milk", "-d", "2 litres"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Add {
                title: "Buy milk".to_string(),
                description: Some("2 litres".to_string()),
            }
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_global_config_flag() {
        let cli = Cli::try_parse_from(["dreamtasks", "list", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.command, Command::List { search: None });
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["dreamtasks", "done", "abc"]).is_err());
    }

    #[test]
    fn only_quote_views_fetch_quotes() {
        assert!(Command::Quotes.needs_quotes());
        assert!(Command::Dashboard.needs_quotes());
        assert!(!Command::Remove { id: 1 }.needs_quotes());
    }
}

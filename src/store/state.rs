use std::fmt;

use crate::model::{Quote, Task, User};
use crate::mvi::StoreState;

/// Top-level screen selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Tasks,
    Quotes,
    Profile,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Tasks => "tasks",
            Self::Quotes => "quotes",
            Self::Profile => "profile",
        }
    }

    pub fn all() -> &'static [View] {
        &[Self::Dashboard, Self::Tasks, Self::Quotes, Self::Profile]
    }

    /// Parse a view tag. Unknown tags return `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == tag)
    }

    /// Unknown tags render the dashboard.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of everything the app shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Insertion order; ids are unique.
    pub tasks: Vec<Task>,
    pub quotes: Vec<Quote>,
    pub user: User,
    pub search_query: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_view: View,
}

impl StoreState for AppState {}

impl AppState {
    pub fn with_user(user: User) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks matching the current search query, in insertion order.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.matches(&self.search_query))
            .collect()
    }

    /// The first `n` tasks, as shown on the dashboard.
    pub fn recent_tasks(&self, n: usize) -> &[Task] {
        &self.tasks[..n.min(self.tasks.len())]
    }

    pub fn featured_quote(&self) -> Option<&Quote> {
        self.quotes.first()
    }
}

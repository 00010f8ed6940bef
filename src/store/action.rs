use crate::model::{Quote, Task, TaskId, UserPatch};
use crate::mvi::Action;
use crate::store::state::View;

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SetLoading(bool),
    /// Records a failure and ends loading.
    SetError(String),
    /// Replaces all tasks and ends loading.
    SetTasks(Vec<Task>),
    AddTask(Task),
    /// Replaces the task with the same id, keeping its position.
    UpdateTask(Task),
    DeleteTask(TaskId),
    /// Replaces all quotes and ends loading.
    SetQuotes(Vec<Quote>),
    SetSearchQuery(String),
    SetCurrentView(View),
    UpdateUser(UserPatch),
}

impl Action for AppAction {}

impl AppAction {
    /// Stable name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetLoading(_) => "SET_LOADING",
            Self::SetError(_) => "SET_ERROR",
            Self::SetTasks(_) => "SET_TASKS",
            Self::AddTask(_) => "ADD_TASK",
            Self::UpdateTask(_) => "UPDATE_TASK",
            Self::DeleteTask(_) => "DELETE_TASK",
            Self::SetQuotes(_) => "SET_QUOTES",
            Self::SetSearchQuery(_) => "SET_SEARCH_QUERY",
            Self::SetCurrentView(_) => "SET_CURRENT_VIEW",
            Self::UpdateUser(_) => "UPDATE_USER",
        }
    }
}

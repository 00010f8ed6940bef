use crate::mvi::Reducer;
use crate::store::action::AppAction;
use crate::store::state::AppState;

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::SetLoading(is_loading) => AppState { is_loading, ..state },
            AppAction::SetError(error) => AppState {
                error: Some(error),
                is_loading: false,
                ..state
            },
            AppAction::SetTasks(tasks) => AppState {
                tasks,
                is_loading: false,
                ..state
            },
            AppAction::AddTask(task) => {
                let mut tasks = state.tasks;
                tasks.push(task);
                AppState { tasks, ..state }
            }
            AppAction::UpdateTask(updated) => {
                let tasks = state
                    .tasks
                    .into_iter()
                    .map(|task| {
                        if task.id == updated.id {
                            updated.clone()
                        } else {
                            task
                        }
                    })
                    .collect();
                AppState { tasks, ..state }
            }
            AppAction::DeleteTask(id) => {
                let mut tasks = state.tasks;
                tasks.retain(|task| task.id != id);
                AppState { tasks, ..state }
            }
            AppAction::SetQuotes(quotes) => AppState {
                quotes,
                is_loading: false,
                ..state
            },
            AppAction::SetSearchQuery(search_query) => AppState {
                search_query,
                ..state
            },
            AppAction::SetCurrentView(current_view) => AppState {
                current_view,
                ..state
            },
            AppAction::UpdateUser(patch) => {
                let user = state.user.merged(&patch);
                AppState { user, ..state }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Quote, Task, UserPatch};
    use crate::store::state::View;
    use chrono::Utc;

    fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed: false,
            created_at: Utc::now(),
        }
    }

    fn with_tasks(tasks: Vec<Task>) -> AppState {
        AppState {
            tasks,
            ..AppState::default()
        }
    }

    #[test]
    fn set_error_clears_loading() {
        let state = AppReducer::reduce(AppState::default(), AppAction::SetLoading(true));
        assert!(state.is_loading);

        let state = AppReducer::reduce(state, AppAction::SetError("boom".into()));
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_loading);
    }

    #[test]
    fn set_tasks_and_set_quotes_clear_loading() {
        let loading = AppState {
            is_loading: true,
            ..AppState::default()
        };
        let state = AppReducer::reduce(loading.clone(), AppAction::SetTasks(vec![task(1, "a")]));
        assert!(!state.is_loading);
        assert_eq!(state.tasks.len(), 1);

        let quote = Quote {
            content: "c".into(),
            author: "a".into(),
            id: "q".into(),
        };
        let state = AppReducer::reduce(loading, AppAction::SetQuotes(vec![quote]));
        assert!(!state.is_loading);
        assert_eq!(state.quotes.len(), 1);
    }

    #[test]
    fn add_task_appends() {
        let state = with_tasks(vec![task(1, "a")]);
        let state = AppReducer::reduce(state, AppAction::AddTask(task(2, "b")));
        let ids: Vec<i64> = state.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn update_task_keeps_position() {
        let state = with_tasks(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        let mut changed = state.tasks[1].clone();
        changed.completed = true;

        let next = AppReducer::reduce(state.clone(), AppAction::UpdateTask(changed));
        assert!(next.tasks[1].completed);
        assert_eq!(next.tasks[0], state.tasks[0]);
        assert_eq!(next.tasks[2], state.tasks[2]);
    }

    #[test]
    fn update_unknown_task_is_noop() {
        let state = with_tasks(vec![task(1, "a")]);
        let next = AppReducer::reduce(state.clone(), AppAction::UpdateTask(task(9, "x")));
        assert_eq!(next, state);
    }

    #[test]
    fn delete_task_preserves_order_of_rest() {
        let state = with_tasks(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        let next = AppReducer::reduce(state, AppAction::DeleteTask(2));
        let ids: Vec<i64> = next.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let again = AppReducer::reduce(next.clone(), AppAction::DeleteTask(2));
        assert_eq!(again, next);
    }

    #[test]
    fn view_and_query_are_replaced() {
        let state = AppReducer::reduce(AppState::default(), AppAction::SetCurrentView(View::Profile));
        let state = AppReducer::reduce(state, AppAction::SetSearchQuery("milk".into()));
        assert_eq!(state.current_view, View::Profile);
        assert_eq!(state.search_query, "milk");
    }

    #[test]
    fn update_user_merges_shallowly() {
        let before = AppState::default();
        let state = AppReducer::reduce(
            before.clone(),
            AppAction::UpdateUser(UserPatch {
                name: Some("Nok".into()),
                ..UserPatch::default()
            }),
        );
        assert_eq!(state.user.name, "Nok");
        assert_eq!(state.user.email, before.user.email);
        assert_eq!(state.user.avatar, before.user.avatar);
    }
}

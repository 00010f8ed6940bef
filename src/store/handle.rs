use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::api::{ApiResponse, ApiService};
use crate::model::{NewTask, QuotePage, Task, TaskId, TaskPatch, UserPatch};
use crate::mvi::Reducer;
use crate::storage::{LocalStorage, TASKS_KEY};
use crate::store::action::AppAction;
use crate::store::reducer::AppReducer;
use crate::store::state::{AppState, View};

/// Quotes requested per refresh.
pub const QUOTES_PAGE_SIZE: u32 = 10;

/// Result of a task mutation: the in-memory outcome plus what happened
/// when the task collection was written to storage.
///
/// A failed write never rolls back the in-memory change.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub value: T,
    pub persisted: ApiResponse<()>,
}

impl<T> Mutation<T> {
    pub fn is_persisted(&self) -> bool {
        self.persisted.success
    }
}

/// Handle to the application state.
///
/// Cloning is cheap; every clone talks to the same state. Construct one
/// per app and pass it to whoever needs it.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<AppState>,
    /// Held across reduce-then-persist so the stored collection always
    /// matches the latest state.
    write_lock: Mutex<()>,
    api: ApiService,
    storage: LocalStorage,
}

impl Store {
    pub fn new(api: ApiService, storage: LocalStorage, initial: AppState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            inner: Arc::new(StoreInner {
                state,
                write_lock: Mutex::new(()),
                api,
                storage,
            }),
        }
    }

    /// Create a store and run [`load_initial_data`](Self::load_initial_data) once.
    pub async fn bootstrap(api: ApiService, storage: LocalStorage, initial: AppState) -> Self {
        let store = Self::new(api, storage, initial);
        store.load_initial_data().await;
        store
    }

    pub fn snapshot(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that sees every state produced after this call.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }

    /// Run `action` through the reducer and publish the result.
    pub fn dispatch(&self, action: AppAction) {
        tracing::trace!(action = action.name(), "Dispatch");
        self.inner.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = AppReducer::reduce(current, action);
        });
    }

    // -- Tasks ----------------------------------------------------------------

    pub fn add_task(&self, new: NewTask) -> Mutation<Task> {
        let _guard = self.inner.write_lock.lock();
        let now = Utc::now();
        let task = Task::create(self.next_task_id(now), new, now);
        self.dispatch(AppAction::AddTask(task.clone()));
        Mutation {
            value: task,
            persisted: self.persist_tasks(),
        }
    }

    /// Returns `None`, without touching state or storage, if `id` is unknown.
    pub fn update_task(&self, id: TaskId, patch: TaskPatch) -> Option<Mutation<Task>> {
        let _guard = self.inner.write_lock.lock();
        let updated = self.inner.state.borrow().task(id)?.merged(&patch);
        self.dispatch(AppAction::UpdateTask(updated.clone()));
        Some(Mutation {
            value: updated,
            persisted: self.persist_tasks(),
        })
    }

    /// `value` reports whether a task was removed. Storage is rewritten either way.
    pub fn delete_task(&self, id: TaskId) -> Mutation<bool> {
        let _guard = self.inner.write_lock.lock();
        let existed = self.inner.state.borrow().task(id).is_some();
        self.dispatch(AppAction::DeleteTask(id));
        Mutation {
            value: existed,
            persisted: self.persist_tasks(),
        }
    }

    /// Current time in ms, bumped past the newest id so ids stay unique
    /// when tasks are added faster than the clock ticks.
    fn next_task_id(&self, now: DateTime<Utc>) -> TaskId {
        let candidate = now.timestamp_millis();
        let state = self.inner.state.borrow();
        let newest = state.tasks.iter().map(|t| t.id).max();
        match newest {
            Some(newest) if newest >= candidate => newest
                .checked_add(1)
                .or_else(|| unused_id_below(&state.tasks))
                .unwrap_or(candidate),
            _ => candidate,
        }
    }

    fn persist_tasks(&self) -> ApiResponse<()> {
        let tasks = self.inner.state.borrow().tasks.clone();
        let persisted = self.inner.storage.save(TASKS_KEY, &tasks);
        if !persisted.success {
            tracing::warn!(
                count = tasks.len(),
                error = persisted.error.as_deref().unwrap_or_default(),
                "Task changes kept in memory but not saved"
            );
        }
        persisted
    }

    // -- View state -----------------------------------------------------------

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.dispatch(AppAction::SetSearchQuery(query.into()));
    }

    pub fn set_current_view(&self, view: View) {
        self.dispatch(AppAction::SetCurrentView(view));
    }

    pub fn update_user(&self, patch: UserPatch) {
        self.dispatch(AppAction::UpdateUser(patch));
    }

    // -- Loading --------------------------------------------------------------

    /// Replace quotes with a fresh page. On failure the old quotes stay and
    /// `error` is left alone; the outcome is returned for the caller.
    pub async fn load_quotes(&self) -> ApiResponse<QuotePage> {
        let result = self.inner.api.get_quotes(QUOTES_PAGE_SIZE, 1).await;
        match &result.data {
            Some(page) if result.success => {
                self.dispatch(AppAction::SetQuotes(page.results.clone()));
            }
            _ => {
                tracing::error!(
                    error = result.error.as_deref().unwrap_or("no data"),
                    "Error loading quotes"
                );
            }
        }
        result
    }

    /// Load persisted tasks into state. A stored collection that cannot be
    /// read is surfaced in `error`; a missing one is not an error.
    pub fn load_tasks(&self) -> Result<usize, String> {
        let saved = self.inner.storage.load::<Vec<Task>>(TASKS_KEY);
        if let Some(error) = saved.error {
            self.dispatch(AppAction::SetError(error.clone()));
            return Err(error);
        }
        match saved.data {
            Some(tasks) => {
                let count = tasks.len();
                self.dispatch(AppAction::SetTasks(tasks));
                Ok(count)
            }
            None => Ok(0),
        }
    }

    /// Startup sequence: mark loading, restore tasks, fetch quotes.
    ///
    /// Loading is cleared only by a successful task restore, a quote fetch or
    /// an error; if storage is empty and quotes fail it stays set.
    pub async fn load_initial_data(&self) {
        self.dispatch(AppAction::SetLoading(true));

        match self.load_tasks() {
            Ok(count) => tracing::info!(count, "Restored tasks"),
            Err(error) => {
                tracing::error!(error = %error, "Failed to restore tasks");
                return;
            }
        }

        self.load_quotes().await;
    }
}

/// An id no task uses, for when the newest id is already `i64::MAX`:
/// one below the smallest id, or else the first gap between sorted ids.
fn unused_id_below(tasks: &[Task]) -> Option<TaskId> {
    let mut ids: Vec<TaskId> = tasks.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    let smallest = *ids.first()?;
    smallest.checked_sub(1).or_else(|| {
        ids.windows(2)
            .find(|pair| pair[1] - pair[0] > 1)
            .map(|pair| pair[0] + 1)
    })
}

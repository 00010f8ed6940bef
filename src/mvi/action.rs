//! Base trait for actions.

/// Marker trait for action values.
///
/// Actions come from user intents (add a task, switch view) and from
/// completed side effects (quotes fetched, tasks loaded). Reducers consume them.
pub trait Action: Send + 'static {}

//! Reducer trait.

use super::action::Action;
use super::state::StoreState;

/// Transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    type State: StoreState;
    type Action: Action;

    /// Apply an action and return the next state. No side effects.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

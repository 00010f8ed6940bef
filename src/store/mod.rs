//! Application state container.
//!
//! All mutation flows through [`AppReducer`]; [`Store`] wraps it with the
//! side effects (persistence, quote fetching) each intent needs.

mod action;
mod handle;
mod reducer;
mod state;

pub use action::AppAction;
pub use handle::{Mutation, Store, QUOTES_PAGE_SIZE};
pub use reducer::AppReducer;
pub use state::{AppState, View};

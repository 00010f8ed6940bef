//! Model-View-Intent primitives.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Consumer
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot consumers render from
//! - **Action**: tagged description of an intended change
//! - **Reducer**: pure function producing the next snapshot

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;

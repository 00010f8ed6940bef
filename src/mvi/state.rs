//! Base trait for store state.

/// Marker trait for state snapshots.
///
/// Snapshots are cloned out to consumers, compared to detect changes and
/// start from a default before bootstrap.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}

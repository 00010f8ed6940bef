//! Personal task tracker core: a reducer-driven state store and a thin
//! HTTP data-access layer over a quotes API, backed by persistent storage.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod storage;
pub mod store;

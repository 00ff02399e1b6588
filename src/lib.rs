//! userdesk: terminal client for user records (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod api;
pub mod commands;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod render;
pub mod store;
pub mod view;

//! Browser glue and small pure helpers.

pub mod config;
pub mod jwt;
pub mod session_store;

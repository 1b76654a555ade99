//! LearnQuest fixture daemon library - exposes modules for testing.

pub mod config;
pub mod fixtures;
pub mod routes;
pub mod server;

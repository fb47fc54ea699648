// Public API for integration tests and the binary

pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod import;
pub mod rng;
pub mod state;
pub mod types;

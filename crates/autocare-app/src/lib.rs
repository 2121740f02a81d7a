//! Application layer for autocare: configuration, bundled reference data,
//! and the use-case services behind the CLI

pub mod app;
pub mod config;
pub mod defaults;
pub mod repository;
pub mod validate;

pub use config::Config;

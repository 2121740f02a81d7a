//! Domain layer for autocare: models, knowledge tables, and the
//! maintenance/diagnostic decision engines

pub mod knowledge;
pub mod model;
pub mod repository;
pub mod service;

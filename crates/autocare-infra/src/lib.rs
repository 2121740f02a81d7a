//! Infrastructure layer for autocare: reference-data loaders, repository
//! implementations, and bulk history import

pub mod history_csv;
pub mod persistence;
pub mod reference;

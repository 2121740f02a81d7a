//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_report_repo;
mod file_schedule_repo;
mod file_service_history_repo;

#[allow(unused_imports)]
pub use file_report_repo::FileReportRepository;
#[allow(unused_imports)]
pub use file_schedule_repo::FileScheduleRepository;
#[allow(unused_imports)]
pub use file_service_history_repo::FileServiceHistoryRepository;

/// Run statistics for logging and reporting
pub mod summary;

pub use summary::RunSummary;

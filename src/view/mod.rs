pub mod controller;
pub mod filters;
pub mod orchestrator;
pub mod pagination;
pub mod summary;

pub use controller::{PageView, QueueController};
pub use filters::{available_values, project, Dimension, FilterState};
pub use orchestrator::{DashboardSnapshot, SnapshotOrchestrator};
pub use pagination::Pager;
pub use summary::summarize;

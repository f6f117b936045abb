// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod view;

// Re-export commonly used items
pub use client::DashboardClient;
pub use config::{get_api_base_url, load_config, save_config, Config};
pub use error::{DashboardError, DashboardResult};
pub use models::*;
pub use view::{
    available_values, summarize, Dimension, FilterState, Pager, QueueController,
    SnapshotOrchestrator,
};

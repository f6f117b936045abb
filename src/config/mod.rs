mod config;

pub use config::{get_api_base_url, get_trend_window, load_config, save_config, Config};

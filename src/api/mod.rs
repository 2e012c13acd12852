mod config;
mod fetch;

pub use config::{ApiConfig, ListQuery, SortField, SortOrder};
pub use fetch::{fetch_episode, fetch_episodes};

pub mod api;
pub mod episode;
pub mod error;
pub mod http;
pub mod page;

// Re-export main types for convenience
pub use api::{ApiConfig, ListQuery, SortField, SortOrder, fetch_episode, fetch_episodes};
pub use episode::{
    EpisodeViewModel, RawDuration, RawEpisode, RawFile, build_view_model, coerce_seconds,
    format_duration,
};
pub use error::{ApiError, EpisodeError, PageError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use page::{HomePage, LATEST_EPISODE_COUNT, load_episode_page, load_home_page};

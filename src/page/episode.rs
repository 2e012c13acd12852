use crate::api::{ApiConfig, fetch_episode};
use crate::episode::{EpisodeViewModel, build_view_model};
use crate::error::PageError;
use crate::http::HttpClient;

/// Load the detail page for a single episode
pub async fn load_episode_page<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    id: &str,
) -> Result<EpisodeViewModel, PageError> {
    let raw = fetch_episode(client, config, id).await?;
    Ok(build_view_model(&raw)?)
}

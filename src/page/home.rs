// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{ApiConfig, ListQuery, fetch_episodes};
use crate::episode::{EpisodeViewModel, build_view_model};
use crate::error::PageError;
use crate::http::HttpClient;

/// Number of episodes shown in the "latest releases" section
pub const LATEST_EPISODE_COUNT: usize = 2;

/// Data for the episode listing page
///
/// The two lists preserve the API's order (newest first); their
/// concatenation is exactly the API's response.
#[derive(Debug, Clone)]
pub struct HomePage {
    /// The newest episodes, highlighted at the top of the page
    pub latest_episodes: Vec<EpisodeViewModel>,
    /// Every remaining episode
    pub all_episodes: Vec<EpisodeViewModel>,
}

/// Load the episode listing page
///
/// Issues one listing request, maps every returned record into a
/// view-model, and splits off the latest-releases prefix. Any fetch or
/// mapping failure propagates; there are no retries and no partial
/// results.
pub async fn load_home_page<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    query: &ListQuery,
) -> Result<HomePage, PageError> {
    let raw_episodes = fetch_episodes(client, config, query).await?;

    let mut episodes = raw_episodes
        .iter()
        .map(build_view_model)
        .collect::<Result<Vec<_>, _>>()?;

    let split_at = LATEST_EPISODE_COUNT.min(episodes.len());
    let all_episodes = episodes.split_off(split_at);

    Ok(HomePage {
        latest_episodes: episodes,
        all_episodes,
    })
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::DeserializeOwned;
use url::Url;

use crate::episode::RawEpisode;
use crate::error::ApiError;
use crate::http::HttpClient;

use super::config::{ApiConfig, ListQuery};

/// Fetch the episode listing, filtered and ordered by the query
pub async fn fetch_episodes<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    query: &ListQuery,
) -> Result<Vec<RawEpisode>, ApiError> {
    let url = config.list_url(query)?;
    get_json(client, url).await
}

/// Fetch a single episode by identifier
pub async fn fetch_episode<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    id: &str,
) -> Result<RawEpisode, ApiError> {
    let url = config.episode_url(id)?;
    get_json(client, url).await
}

async fn get_json<C: HttpClient, T: DeserializeOwned>(
    client: &C,
    url: Url,
) -> Result<T, ApiError> {
    let url = url.to_string();

    let response = client
        .get(&url)
        .await
        .map_err(|e| ApiError::RequestFailed {
            url: url.clone(),
            source: e,
        })?;

    if !(200..300).contains(&response.status) {
        return Err(ApiError::HttpStatus {
            url,
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| ApiError::JsonFailed { url, source: e })
}

use url::Url;

use crate::error::ApiError;

/// Field the episode listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    PublishedAt,
}

impl SortField {
    fn as_str(self) -> &'static str {
        match self {
            SortField::PublishedAt => "published_at",
        }
    }
}

/// Sort direction for the episode listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters for the episode listing endpoint
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Maximum number of episodes to return (None = server default)
    pub limit: Option<usize>,
    pub sort: SortField,
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: None,
            sort: SortField::PublishedAt,
            order: SortOrder::Desc,
        }
    }
}

/// Location of the episodes API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Create a config from a base URL string, e.g. "http://localhost:3333"
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // A trailing slash keeps Url::join from eating the last path segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        Ok(Self {
            base_url: Url::parse(&normalized)?,
        })
    }

    /// URL of the episode listing endpoint with query parameters applied
    pub fn list_url(&self, query: &ListQuery) -> Result<Url, ApiError> {
        let mut url = self.base_url.join("episodes")?;

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(limit) = query.limit {
                pairs.append_pair("_limit", &limit.to_string());
            }
            pairs.append_pair("_sort", query.sort.as_str());
            pairs.append_pair("_order", query.order.as_str());
        }

        Ok(url)
    }

    /// URL of a single episode, keyed by identifier
    pub fn episode_url(&self, id: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join("episodes/")?.join(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_includes_query_parameters() {
        let config = ApiConfig::new("http://localhost:3333").unwrap();
        let query = ListQuery {
            limit: Some(12),
            sort: SortField::PublishedAt,
            order: SortOrder::Desc,
        };

        let url = config.list_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn list_url_omits_limit_when_unset() {
        let config = ApiConfig::new("http://localhost:3333").unwrap();
        let url = config.list_url(&ListQuery::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn episode_url_appends_identifier() {
        let config = ApiConfig::new("http://localhost:3333").unwrap();
        let url = config.episode_url("como-comecar-na-programacao").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes/como-comecar-na-programacao"
        );
    }

    #[test]
    fn base_url_path_is_preserved() {
        let config = ApiConfig::new("https://api.example.com/v1").unwrap();
        let url = config.list_url(&ListQuery::default()).unwrap();
        assert!(url.as_str().starts_with("https://api.example.com/v1/episodes?"));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = ApiConfig::new("not a url");
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};

use crate::error::EpisodeError;

use super::duration::{coerce_seconds, format_duration};
use super::model::RawEpisode;

/// Display format for publish dates, e.g. "22 jan 21"
const PUBLISH_DATE_FORMAT: &str = "%-d %b %y";

/// Publish dates are rendered in Brazilian Portuguese
const PUBLISH_DATE_LOCALE: Locale = Locale::pt_BR;

/// A display-ready episode, with dates and durations already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeViewModel {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    /// Human-formatted publish date ("22 jan 21")
    pub published_at: String,
    /// Duration in seconds
    pub duration: i64,
    /// Duration formatted as `HH:MM:SS`, always derived from `duration`
    pub duration_as_string: String,
    /// Episode description, HTML formatted
    pub description: String,
    /// URL of the playable audio file
    pub url: String,
}

/// Build a display-ready view-model from a raw API episode
///
/// Construction is all-or-nothing: an unparseable publish date or a
/// non-numeric duration fails the whole record.
pub fn build_view_model(raw: &RawEpisode) -> Result<EpisodeViewModel, EpisodeError> {
    let published_at = format_publish_date(&raw.published_at)?;
    let duration = coerce_seconds(&raw.file.duration, &raw.id)?;
    let duration_as_string = format_duration(duration)?;

    Ok(EpisodeViewModel {
        id: raw.id.clone(),
        title: raw.title.clone(),
        thumbnail: raw.thumbnail.clone(),
        members: raw.members.clone(),
        published_at,
        duration,
        duration_as_string,
        description: raw.description.clone(),
        url: raw.file.url.clone(),
    })
}

fn format_publish_date(date_str: &str) -> Result<String, EpisodeError> {
    let date = parse_publish_date(date_str).map_err(|e| EpisodeError::MalformedDate {
        date_str: date_str.to_string(),
        source: e,
    })?;

    Ok(date
        .format_localized(PUBLISH_DATE_FORMAT, PUBLISH_DATE_LOCALE)
        .to_string())
}

/// Accept the ISO-8601 shapes the API has been seen to serve
fn parse_publish_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
}

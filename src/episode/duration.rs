use crate::error::EpisodeError;

use super::model::RawDuration;

/// Format a total number of seconds as a zero-padded `HH:MM:SS` string
///
/// Hours grow beyond two digits for very long episodes; minutes and seconds
/// stay within 00-59.
pub fn format_duration(total_seconds: i64) -> Result<String, EpisodeError> {
    if total_seconds < 0 {
        return Err(EpisodeError::NegativeDuration {
            seconds: total_seconds,
        });
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    Ok(format!("{hours:02}:{minutes:02}:{seconds:02}"))
}

/// Coerce the API's duration field into a number of seconds
///
/// The API serves the duration either as a JSON number or as a numeric
/// string depending on how the episode was ingested.
pub fn coerce_seconds(duration: &RawDuration, episode_id: &str) -> Result<i64, EpisodeError> {
    match duration {
        RawDuration::Seconds(seconds) => Ok(*seconds),
        RawDuration::Text(text) => {
            text.trim()
                .parse()
                .map_err(|_| EpisodeError::MalformedDuration {
                    id: episode_id.to_string(),
                    value: text.clone(),
                })
        }
    }
}

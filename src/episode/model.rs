use serde::{Deserialize, Serialize};

/// An episode record as returned by the episodes API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    /// Cover image URL
    pub thumbnail: String,
    /// Comma-separated list of participant names
    pub members: String,
    /// ISO-8601 publish timestamp
    pub published_at: String,
    /// Episode description, HTML formatted
    pub description: String,
    pub file: RawFile,
}

/// The playable audio file attached to an episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFile {
    pub url: String,
    pub duration: RawDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
}

/// Duration in seconds, served by the API either as a JSON number or as a
/// numeric string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Seconds(i64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMERIC_DURATION: &str = r#"{
        "id": "a-importancia-da-contribuicao-em-open-source",
        "title": "A importância da contribuição em Open Source",
        "thumbnail": "https://example.com/thumbnails/open-source.jpg",
        "members": "Diego e Richard",
        "published_at": "2021-01-22 18:25:00",
        "description": "<p>Nesse episódio conversamos sobre Open Source.</p>",
        "file": {
            "url": "https://example.com/audio/open-source.m4a",
            "type": "audio/x-m4a",
            "duration": 3981
        }
    }"#;

    const STRING_DURATION: &str = r#"{
        "id": "como-comecar-na-programacao",
        "title": "Como começar na programação",
        "thumbnail": "https://example.com/thumbnails/comecar.jpg",
        "members": "Tiago, Diego e Pellizzetti",
        "published_at": "2021-01-15 18:25:00",
        "description": "<p>Por onde começar?</p>",
        "file": {
            "url": "https://example.com/audio/comecar.m4a",
            "duration": "3981"
        }
    }"#;

    #[test]
    fn deserializes_numeric_duration() {
        let episode: RawEpisode = serde_json::from_str(NUMERIC_DURATION).unwrap();
        assert_eq!(episode.id, "a-importancia-da-contribuicao-em-open-source");
        assert_eq!(episode.members, "Diego e Richard");
        assert_eq!(episode.file.mime_type.as_deref(), Some("audio/x-m4a"));
        assert!(matches!(episode.file.duration, RawDuration::Seconds(3981)));
    }

    #[test]
    fn deserializes_string_duration() {
        let episode: RawEpisode = serde_json::from_str(STRING_DURATION).unwrap();
        assert!(episode.file.mime_type.is_none());
        match &episode.file.duration {
            RawDuration::Text(text) => assert_eq!(text, "3981"),
            other => panic!("expected string duration, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_episode_list() {
        let json = format!("[{NUMERIC_DURATION},{STRING_DURATION}]");
        let episodes: Vec<RawEpisode> = serde_json::from_str(&json).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].id, "como-comecar-na-programacao");
    }
}

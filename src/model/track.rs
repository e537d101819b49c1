//! Track metadata reported by the widget

use serde::{Deserialize, Serialize};

/// Owner of a track
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackUser {
    pub username: String,
}

/// A track as reported by the embedded widget.
///
/// Field names follow the widget's own payload so playlists can be
/// deserialized directly. Two tracks are the same track when their ids match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    pub permalink_url: String,
    pub user: TrackUser,
    /// Length in milliseconds
    #[serde(default)]
    pub duration: u64,
}

impl Track {
    pub fn is_same_track(&self, other: &Track) -> bool {
        self.id == other.id
    }

    pub fn artist(&self) -> &str {
        &self.user.username
    }
}

pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(9_999), "0:09");
        assert_eq!(format_duration(61_000), "1:01");
        assert_eq!(format_duration(754_321), "12:34");
    }

    #[test]
    fn deserializes_widget_payload() {
        let json = r#"{
            "id": 42,
            "title": "night drive",
            "permalink_url": "https://soundcloud.com/someone/night-drive",
            "user": { "username": "someone", "avatar_url": null },
            "genre": "ambient"
        }"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, 42);
        assert_eq!(track.artist(), "someone");
        assert_eq!(track.duration, 0);
    }

    #[test]
    fn identity_is_the_id() {
        let a = Track {
            id: 1,
            title: "a".into(),
            permalink_url: "https://example.com/a".into(),
            user: TrackUser { username: "u".into() },
            duration: 1000,
        };
        let mut renamed = a.clone();
        renamed.title = "a (remaster)".into();
        assert!(a.is_same_track(&renamed));

        let mut other = a.clone();
        other.id = 2;
        assert!(!a.is_same_track(&other));
    }
}

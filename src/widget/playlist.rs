//! Playlist loading for the simulated widget

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Track;

const DEMO_PLAYLIST: &str = r#"[
  {
    "id": 1001,
    "title": "static bloom",
    "permalink_url": "https://soundcloud.com/1017underwrld/static-bloom",
    "duration": 154000,
    "user": { "username": "1017underwrld" }
  },
  {
    "id": 1002,
    "title": "AVERYLONGTRACKTITLETHATOVERFLOWS",
    "permalink_url": "https://soundcloud.com/1017underwrld/averylongtracktitlethatoverflows",
    "duration": 187000,
    "user": { "username": "1017underwrld" }
  },
  {
    "id": 1003,
    "title": "low tide",
    "permalink_url": "https://soundcloud.com/1017underwrld/low-tide",
    "duration": 132000,
    "user": { "username": "1017underwrld" }
  },
  {
    "id": 1004,
    "title": "midnight transit (slowed + reverb edit)",
    "permalink_url": "https://soundcloud.com/1017underwrld/midnight-transit",
    "duration": 211000,
    "user": { "username": "1017underwrld" }
  },
  {
    "id": 1005,
    "title": "outro",
    "permalink_url": "https://soundcloud.com/1017underwrld/outro",
    "duration": 98000,
    "user": { "username": "1017underwrld" }
  }
]"#;

#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("failed to read playlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid playlist: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("playlist has no tracks")]
    Empty,
    #[error("track {id} has no duration")]
    MissingDuration { id: u64 },
}

pub fn parse_playlist(json: &str) -> Result<Vec<Track>, PlaylistError> {
    let tracks: Vec<Track> = serde_json::from_str(json)?;
    if tracks.is_empty() {
        return Err(PlaylistError::Empty);
    }
    if let Some(track) = tracks.iter().find(|track| track.duration == 0) {
        return Err(PlaylistError::MissingDuration { id: track.id });
    }
    Ok(tracks)
}

pub fn load_playlist(path: &Path) -> Result<Vec<Track>, PlaylistError> {
    let content = std::fs::read_to_string(path).map_err(|source| PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tracks = parse_playlist(&content)?;
    tracing::info!(path = %path.display(), tracks = tracks.len(), "Playlist loaded");
    Ok(tracks)
}

/// Built-in five track playlist used when no file is given
pub fn demo_playlist() -> Result<Vec<Track>, PlaylistError> {
    parse_playlist(DEMO_PLAYLIST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_playlist_has_five_tracks() {
        let tracks = demo_playlist().unwrap();
        assert_eq!(tracks.len(), 5);
        assert!(tracks.iter().all(|track| track.duration > 0));
    }

    #[test]
    fn empty_playlist_is_rejected() {
        assert!(matches!(parse_playlist("[]"), Err(PlaylistError::Empty)));
    }

    #[test]
    fn malformed_playlist_is_a_parse_error() {
        let err = parse_playlist(r#"[{"id": "x"}]"#).unwrap_err();
        assert!(matches!(err, PlaylistError::Parse(_)));
        assert!(err.to_string().starts_with("invalid playlist"));
    }

    #[test]
    fn tracks_need_a_duration() {
        let json = r#"[
            {"id": 1, "title": "a", "permalink_url": "https://soundcloud.com/t/a", "duration": 1000, "user": {"username": "t"}},
            {"id": 2, "title": "b", "permalink_url": "https://soundcloud.com/t/b", "user": {"username": "t"}}
        ]"#;
        let err = parse_playlist(json).unwrap_err();
        assert!(matches!(err, PlaylistError::MissingDuration { id: 2 }));
        assert_eq!(err.to_string(), "track 2 has no duration");

        let zero = r#"[{"id": 3, "title": "c", "permalink_url": "https://soundcloud.com/t/c", "duration": 0, "user": {"username": "t"}}]"#;
        assert!(matches!(parse_playlist(zero), Err(PlaylistError::MissingDuration { id: 3 })));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_playlist(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}

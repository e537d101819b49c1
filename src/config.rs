//! Command line and runtime configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Playlist the page embeds, already URL-encoded for the embed query string
pub const DEFAULT_PLAYLIST_URL: &str = "https%3A//soundcloud.com/1017underwrld/sets/web";

const WIDGET_BASE_URL: &str = "https://w.soundcloud.com/player/";

/// Delay between the page load and widget initialization
pub const PAGE_LOAD_DELAY: Duration = Duration::from_millis(500);

/// Delay between widget initialization and the playlist diagnostic
pub const PLAYLIST_INFO_DELAY: Duration = Duration::from_millis(1500);

#[derive(Parser, Debug, Clone)]
#[command(name = "sc-mini-player", version, about = "Terminal mini-player synced with an embedded audio widget")]
pub struct Args {
    /// URL-encoded playlist the widget is pointed at
    #[arg(long, env = "SC_PLAYLIST_URL", default_value = DEFAULT_PLAYLIST_URL)]
    pub playlist_url: String,

    /// JSON playlist played by the simulated widget (defaults to a built-in demo)
    #[arg(long, env = "SC_PLAYLIST_FILE")]
    pub playlist_file: Option<PathBuf>,

    /// Logical pixels per terminal column when computing the viewport width
    #[arg(long, env = "SC_PX_PER_COLUMN", default_value_t = 8)]
    pub px_per_column: u32,

    /// Directory for the rolling log files
    #[arg(long, env = "SC_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,
}

/// Behavior constants of the playback controller
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    pub widget_base_url: String,
    /// Smallest viewport width that shows the desktop surface
    pub desktop_breakpoint_px: u32,
    /// Period of progress polling while playing
    pub poll_interval: Duration,
    /// Delay before rewinding a track started by next/previous
    pub skip_seek_delay: Duration,
    /// Delay between rendering a title and measuring it
    pub measure_delay: Duration,
    /// Fade-out time when switching tabs
    pub tab_fade: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            widget_base_url: WIDGET_BASE_URL.to_string(),
            desktop_breakpoint_px: 769,
            poll_interval: Duration::from_millis(1000),
            skip_seek_delay: Duration::from_millis(100),
            measure_delay: Duration::from_millis(100),
            tab_fade: Duration::from_millis(300),
        }
    }
}

impl PlayerConfig {
    /// Source of the hidden embed frame: autoplay off, related tracks,
    /// comments, reposts and the visual player disabled.
    pub fn embed_src(&self, playlist_url: &str) -> String {
        format!(
            "{}?url={}&auto_play=false&hide_related=true&show_comments=false&show_reposts=false&visual=false",
            self.widget_base_url, playlist_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_src_disables_extras() {
        let src = PlayerConfig::default().embed_src(DEFAULT_PLAYLIST_URL);
        assert_eq!(
            src,
            "https://w.soundcloud.com/player/?url=https%3A//soundcloud.com/1017underwrld/sets/web&auto_play=false&hide_related=true&show_comments=false&show_reposts=false&visual=false"
        );
    }

    #[test]
    fn args_have_defaults() {
        let args = Args::try_parse_from(["sc-mini-player"]).unwrap();
        assert_eq!(args.px_per_column, 8);
        assert!(args.playlist_file.is_none());

        let args = Args::try_parse_from(["sc-mini-player", "--px-per-column", "10"]).unwrap();
        assert_eq!(args.px_per_column, 10);
    }
}

use std::sync::OnceLock;

use regex::Regex;

static VIDEO_ID_RE: OnceLock<Regex> = OnceLock::new();

/// Extract the 11-character YouTube video ID from a URL.
///
/// Matches the long-form `watch?v=`, `/embed/`, `/v/`, `/e/` and `youtu.be`
/// shortlink shapes. Returns `None` for anything else; the caller decides
/// whether an absent identifier is a hard failure.
pub fn extract_video_id(url: &str) -> Option<String> {
    let re = VIDEO_ID_RE.get_or_init(|| {
        Regex::new(
            r"(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
        )
        .expect("video id pattern is valid")
    });
    re.captures(url).map(|caps| caps[1].to_string())
}

/// Canonical watch URL for a video ID.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

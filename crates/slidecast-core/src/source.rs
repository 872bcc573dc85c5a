use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::{process::Command, time::timeout};
use tracing::warn;

use crate::{
    error::{Result, SlidecastError},
    types::VideoMetadata,
    url::watch_url,
};

/// Hard timeout on each outbound fetch. A timed-out fetch degrades exactly
/// like a failed one.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Upstream provider of video metadata and caption transcripts.
///
/// `resolve_metadata` never fails: implementations degrade to a
/// fully-unresolved record when the fetch goes wrong, and callers treat that
/// as a valid (if impoverished) result. `fetch_transcript` maps every lookup
/// failure to `None`, which selects the description-based synthesis path
/// downstream.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn resolve_metadata(&self, video_id: &str) -> VideoMetadata;
    async fn fetch_transcript(&self, video_id: &str) -> Option<String>;
}

/// Production video source backed by yt-dlp. One subprocess invocation per
/// call, bounded by [`FETCH_TIMEOUT`]; no caching, no retries.
pub struct YtDlpSource {
    timeout: Duration,
}

impl YtDlpSource {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for YtDlpSource {
    fn default() -> Self {
        Self::new(FETCH_TIMEOUT)
    }
}

/// Shape of the yt-dlp `--dump-json` info dump, reduced to the fields the
/// pipeline consumes.
#[derive(Debug, Deserialize)]
struct RawVideoInfo {
    title: Option<String>,
    uploader: Option<String>,
    #[serde(default)]
    description: String,
    duration: Option<f64>,
    view_count: Option<u64>,
    thumbnail: Option<String>,
}

/// One caption track in yt-dlp's json3 subtitle format.
#[derive(Debug, Deserialize)]
struct SubtitleTrack {
    #[serde(default)]
    events: Vec<SubtitleEvent>,
}

#[derive(Debug, Deserialize)]
struct SubtitleEvent {
    #[serde(default)]
    segs: Vec<SubtitleSeg>,
}

#[derive(Debug, Deserialize)]
struct SubtitleSeg {
    #[serde(default)]
    utf8: String,
}

/// Concatenate a caption track into one transcript string: event texts in
/// chronological order, whitespace collapsed, joined by single spaces.
fn join_track(track: SubtitleTrack) -> String {
    let mut parts = Vec::new();
    for event in track.events {
        let text: String = event.segs.iter().map(|s| s.utf8.as_str()).collect();
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join(" ")
}

impl YtDlpSource {
    async fn dump_info(&self, video_id: &str) -> Result<RawVideoInfo> {
        let output = timeout(
            self.timeout,
            Command::new("yt-dlp")
                .arg(watch_url(video_id))
                .arg("--dump-json")
                .arg("--no-download")
                .arg("--no-warnings")
                .output(),
        )
        .await
        .map_err(|_| SlidecastError::MetadataFailed {
            video_id: video_id.to_string(),
            reason: "metadata fetch timed out".to_string(),
        })??;

        if !output.status.success() {
            return Err(SlidecastError::MetadataFailed {
                video_id: video_id.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let info: RawVideoInfo = serde_json::from_slice(&output.stdout)?;
        Ok(info)
    }

    async fn dump_captions(&self, video_id: &str) -> Result<String> {
        let scratch = tempfile::tempdir()?;
        let template = scratch.path().join("captions");

        let output = timeout(
            self.timeout,
            Command::new("yt-dlp")
                .arg(watch_url(video_id))
                .arg("--skip-download")
                .arg("--write-subs")
                .arg("--write-auto-subs")
                .arg("--sub-langs")
                .arg("en.*,en")
                .arg("--sub-format")
                .arg("json3")
                .arg("--no-warnings")
                .arg("-o")
                .arg(&template)
                .output(),
        )
        .await
        .map_err(|_| SlidecastError::TranscriptFailed {
            video_id: video_id.to_string(),
            reason: "caption fetch timed out".to_string(),
        })??;

        if !output.status.success() {
            return Err(SlidecastError::TranscriptFailed {
                video_id: video_id.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        // yt-dlp names the file captions.<lang>.json3; take the first track.
        let mut entries = tokio::fs::read_dir(scratch.path()).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json3") {
                let json = tokio::fs::read_to_string(&path).await?;
                let track: SubtitleTrack = serde_json::from_str(&json)?;
                return Ok(join_track(track));
            }
        }

        Err(SlidecastError::TranscriptFailed {
            video_id: video_id.to_string(),
            reason: "no caption track available".to_string(),
        })
    }
}

#[async_trait]
impl VideoSource for YtDlpSource {
    async fn resolve_metadata(&self, video_id: &str) -> VideoMetadata {
        match self.dump_info(video_id).await {
            Ok(info) => VideoMetadata {
                title: info.title,
                author: info.uploader,
                description: info.description,
                duration_seconds: info.duration.map(|d| d.max(0.0) as u64),
                view_count: info.view_count,
                thumbnail_url: info.thumbnail,
            },
            Err(e) => {
                warn!(video_id, error = %e, "metadata fetch failed, continuing unresolved");
                VideoMetadata::default()
            }
        }
    }

    async fn fetch_transcript(&self, video_id: &str) -> Option<String> {
        match self.dump_captions(video_id).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                warn!(video_id, "caption track was empty");
                None
            }
            Err(e) => {
                warn!(video_id, error = %e, "no transcript available");
                None
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// Metadata snapshot for a resolved video.
///
/// Every field is optional because the upstream fetch can partially or fully
/// fail; a fully-unresolved record is still a valid result and downstream
/// stages proceed with it. The `display_*` helpers produce the user-facing
/// fallback strings, so "unknown" never leaks into the data model itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub description: String,
    pub duration_seconds: Option<u64>,
    pub view_count: Option<u64>,
    pub thumbnail_url: Option<String>,
}

impl VideoMetadata {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Video information unavailable")
    }

    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown author")
    }

    pub fn display_views(&self) -> String {
        match self.view_count {
            Some(views) => views.to_string(),
            None => "Unknown".to_string(),
        }
    }
}

/// One slide of a presentation. `image_url` may be absent right after
/// synthesis; the placeholder-image pass fills it in before emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub content: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Provenance snapshot embedded in every emitted presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoProvenance {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// The sole output artifact of the pipeline: a title, an ordered bounded
/// sequence of slides, and the video provenance. Constructed per request,
/// never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    pub title: String,
    pub slides: Vec<Slide>,
    pub video_metadata: VideoProvenance,
}

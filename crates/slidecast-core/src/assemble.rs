//! Presentation assembly: orchestrates resolution, transcript acquisition,
//! segmentation and synthesis into one normalized presentation, owning all
//! fallback and error-substitution logic. `assemble` never fails; every
//! internal error becomes a one-slide error presentation.

use tracing::{error, warn};

use crate::{
    error::{Result, SlidecastError},
    images::{assign_placeholder_images, default_thumbnail_url, placeholder_image_url},
    segment::{MAX_SEGMENTS, MAX_SEGMENT_LEN, segment_text},
    source::VideoSource,
    summarize::{SummarizedPresentation, Summarizer, build_summary_prompt},
    synth::{has_usable_paragraphs, minimal_deck, sanitize_slides, slides_from_description, slides_from_segments},
    types::{Presentation, Slide, VideoMetadata, VideoProvenance},
    url::extract_video_id,
};

/// Fixed presentation title used when metadata resolution fails entirely.
const FALLBACK_TITLE: &str = "Presentation from YouTube";

/// Which synthesis strategy the caller prefers. The assembler still walks
/// the full fallback ladder when the preferred strategy cannot deliver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrategyHint {
    /// Deterministic ladder: transcript, then description, then the minimal
    /// metadata-only deck.
    #[default]
    Auto,
    /// Ask the configured summarization collaborator first; fall back to the
    /// deterministic ladder when it is absent or its output does not
    /// validate.
    Summarize,
}

pub struct PresentationAssembler<S> {
    source: S,
    summarizer: Option<Box<dyn Summarizer>>,
}

impl<S: VideoSource> PresentationAssembler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            summarizer: None,
        }
    }

    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Assemble a presentation for a video URL.
    ///
    /// Infallible by contract: an unextractable video ID yields the
    /// invalid-URL error deck without any network calls, and any error past
    /// that point is caught here, logged, and converted to a generic error
    /// deck. The caller only ever observes a well-formed presentation.
    pub async fn assemble(&self, video_url: &str, hint: StrategyHint) -> Presentation {
        let Some(video_id) = extract_video_id(video_url) else {
            return invalid_url_presentation(video_url);
        };

        match self.assemble_inner(video_url, &video_id, hint).await {
            Ok(presentation) => presentation,
            Err(e) => {
                error!(video_url, error = %e, "presentation assembly failed");
                error_presentation(video_url, &e)
            }
        }
    }

    async fn assemble_inner(
        &self,
        video_url: &str,
        video_id: &str,
        hint: StrategyHint,
    ) -> Result<Presentation> {
        // Always resolves, possibly to a fully-degraded record.
        let metadata = self.source.resolve_metadata(video_id).await;

        if hint == StrategyHint::Summarize {
            if let Some(summarizer) = &self.summarizer {
                match self
                    .summarized(summarizer.as_ref(), &metadata, video_url, video_id)
                    .await
                {
                    Ok(presentation) => return Ok(presentation),
                    Err(e) => {
                        warn!(video_id, error = %e, "summarization failed, falling back to deterministic synthesis");
                    }
                }
            }
        }

        let mut slides = match self.source.fetch_transcript(video_id).await {
            Some(transcript) => {
                let segments = segment_text(&transcript, MAX_SEGMENT_LEN, MAX_SEGMENTS);
                slides_from_segments(&segments, &metadata, video_id)
            }
            None if has_usable_paragraphs(&metadata.description) => {
                slides_from_description(&metadata.description, &metadata, video_id)
            }
            None => minimal_deck(&metadata, video_id),
        };

        assign_placeholder_images(&mut slides);

        Ok(Presentation {
            title: metadata
                .title
                .clone()
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            slides,
            video_metadata: provenance(&metadata, video_url, video_id),
        })
    }

    async fn summarized(
        &self,
        summarizer: &dyn Summarizer,
        metadata: &VideoMetadata,
        video_url: &str,
        video_id: &str,
    ) -> Result<Presentation> {
        let prompt = build_summary_prompt(metadata);
        let content = summarizer.summarize(&prompt).await?;

        let draft: SummarizedPresentation =
            serde_json::from_str(&content).map_err(|e| SlidecastError::SummaryFailed {
                reason: format!("summarizer returned malformed JSON: {e}"),
            })?;

        let mut slides = sanitize_slides(draft.slides);
        if slides.is_empty() {
            return Err(SlidecastError::SummaryFailed {
                reason: "summarizer returned no usable slides".to_string(),
            });
        }
        assign_placeholder_images(&mut slides);

        let title = if draft.title.trim().is_empty() {
            metadata
                .title
                .clone()
                .unwrap_or_else(|| FALLBACK_TITLE.to_string())
        } else {
            draft.title
        };

        Ok(Presentation {
            title,
            slides,
            video_metadata: provenance(metadata, video_url, video_id),
        })
    }
}

fn provenance(metadata: &VideoMetadata, video_url: &str, video_id: &str) -> VideoProvenance {
    VideoProvenance {
        title: metadata.title.clone().unwrap_or_default(),
        author: metadata.author.clone(),
        url: video_url.to_string(),
        thumbnail_url: Some(
            metadata
                .thumbnail_url
                .clone()
                .unwrap_or_else(|| default_thumbnail_url(video_id)),
        ),
    }
}

fn invalid_url_presentation(video_url: &str) -> Presentation {
    Presentation {
        title: "Error: Invalid YouTube URL".to_string(),
        slides: vec![Slide {
            title: "Error".to_string(),
            content: vec!["The provided URL is not a valid YouTube video URL.".to_string()],
            image_description: Some("Error icon".to_string()),
            image_url: Some(placeholder_image_url("Error")),
        }],
        video_metadata: VideoProvenance {
            title: String::new(),
            author: None,
            url: video_url.to_string(),
            thumbnail_url: None,
        },
    }
}

fn error_presentation(video_url: &str, error: &SlidecastError) -> Presentation {
    Presentation {
        title: "Error Processing Video".to_string(),
        slides: vec![Slide {
            title: "Error".to_string(),
            content: vec![
                "An error occurred while processing the video.".to_string(),
                format!("Error details: {error}"),
            ],
            image_description: Some("An error icon or warning symbol".to_string()),
            image_url: Some(placeholder_image_url("Error")),
        }],
        video_metadata: VideoProvenance {
            title: String::new(),
            author: None,
            url: video_url.to_string(),
            thumbnail_url: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::MAX_TOTAL_SLIDES;
    use async_trait::async_trait;

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    struct StubSource {
        metadata: VideoMetadata,
        transcript: Option<String>,
    }

    #[async_trait]
    impl VideoSource for StubSource {
        async fn resolve_metadata(&self, _video_id: &str) -> VideoMetadata {
            self.metadata.clone()
        }

        async fn fetch_transcript(&self, _video_id: &str) -> Option<String> {
            self.transcript.clone()
        }
    }

    struct StubSummarizer {
        response: Result<String>,
    }

    #[async_trait]
    impl Summarizer for StubSummarizer {
        async fn summarize(&self, _prompt: &str) -> Result<String> {
            match &self.response {
                Ok(content) => Ok(content.clone()),
                Err(_) => Err(SlidecastError::SummaryFailed {
                    reason: "stubbed failure".to_string(),
                }),
            }
        }
    }

    fn metadata() -> VideoMetadata {
        VideoMetadata {
            title: Some("Learning Rust".to_string()),
            author: Some("Ferris".to_string()),
            description: "This paragraph of the description is long enough to matter. Truly."
                .to_string(),
            duration_seconds: Some(612),
            view_count: Some(12345),
            thumbnail_url: None,
        }
    }

    fn assert_well_formed(presentation: &Presentation) {
        assert!(!presentation.slides.is_empty());
        assert!(presentation.slides.len() <= MAX_TOTAL_SLIDES);
        for slide in &presentation.slides {
            assert!(!slide.content.is_empty(), "slide {:?} has no content", slide.title);
            assert!(slide.image_url.is_some(), "slide {:?} has no image", slide.title);
        }
    }

    #[tokio::test]
    async fn invalid_url_yields_error_deck_without_fetches() {
        // A panicking source proves no network path is reached.
        struct PanicSource;
        #[async_trait]
        impl VideoSource for PanicSource {
            async fn resolve_metadata(&self, _video_id: &str) -> VideoMetadata {
                panic!("resolve_metadata must not be called for invalid URLs");
            }
            async fn fetch_transcript(&self, _video_id: &str) -> Option<String> {
                panic!("fetch_transcript must not be called for invalid URLs");
            }
        }

        let assembler = PresentationAssembler::new(PanicSource);
        let presentation = assembler.assemble("not a url", StrategyHint::Auto).await;
        assert_eq!(presentation.title, "Error: Invalid YouTube URL");
        assert_eq!(presentation.slides.len(), 1);
        assert_eq!(
            presentation.slides[0].content,
            vec!["The provided URL is not a valid YouTube video URL.".to_string()]
        );
        assert_eq!(presentation.video_metadata.url, "not a url");
    }

    #[tokio::test]
    async fn transcript_strategy_builds_bounded_deck() {
        let transcript = (0..60)
            .map(|i| format!("This transcript keeps going with sentence number {i} in it"))
            .collect::<Vec<_>>()
            .join(". ");
        let assembler = PresentationAssembler::new(StubSource {
            metadata: metadata(),
            transcript: Some(transcript),
        });

        let presentation = assembler.assemble(URL, StrategyHint::Auto).await;
        assert_well_formed(&presentation);
        assert_eq!(presentation.title, "Learning Rust");
        assert_eq!(presentation.slides[0].content[1], "Generated from YouTube transcript");
        assert_eq!(
            presentation.slides.last().unwrap().title,
            "Conclusion"
        );
        assert_eq!(presentation.video_metadata.url, URL);
        assert_eq!(
            presentation.video_metadata.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
        );
    }

    #[tokio::test]
    async fn missing_transcript_falls_back_to_description() {
        let assembler = PresentationAssembler::new(StubSource {
            metadata: metadata(),
            transcript: None,
        });

        let presentation = assembler.assemble(URL, StrategyHint::Auto).await;
        assert_well_formed(&presentation);
        assert!(
            presentation
                .slides
                .iter()
                .any(|s| s.title == "Video Statistics")
        );
        assert_eq!(presentation.slides[0].content[1], "Generated automatically from YouTube");
    }

    #[tokio::test]
    async fn no_transcript_and_no_description_yields_minimal_deck() {
        let mut meta = metadata();
        meta.description = String::new();
        let assembler = PresentationAssembler::new(StubSource {
            metadata: meta,
            transcript: None,
        });

        let presentation = assembler.assemble(URL, StrategyHint::Auto).await;
        assert_well_formed(&presentation);
        assert_eq!(presentation.slides.len(), 2);
        assert_eq!(presentation.slides[1].title, "About This Video");
    }

    #[tokio::test]
    async fn degraded_metadata_uses_fallback_title() {
        let assembler = PresentationAssembler::new(StubSource {
            metadata: VideoMetadata::default(),
            transcript: None,
        });

        let presentation = assembler.assemble(URL, StrategyHint::Auto).await;
        assert_well_formed(&presentation);
        assert_eq!(presentation.title, "Presentation from YouTube");
        assert_eq!(presentation.slides[0].title, "Video information unavailable");
    }

    #[tokio::test]
    async fn valid_summary_bypasses_segmentation() {
        let summary = r#"{
            "title": "Summarized Deck",
            "slides": [
                {"title": "Overview", "content": ["one", "two"], "image_description": "an overview"},
                {"title": "Detail", "content": ["three"]}
            ]
        }"#;
        let assembler = PresentationAssembler::new(StubSource {
            metadata: metadata(),
            transcript: Some("Should not be used. At all".to_string()),
        })
        .with_summarizer(Box::new(StubSummarizer {
            response: Ok(summary.to_string()),
        }));

        let presentation = assembler.assemble(URL, StrategyHint::Summarize).await;
        assert_well_formed(&presentation);
        assert_eq!(presentation.title, "Summarized Deck");
        assert_eq!(presentation.slides.len(), 2);
        assert_eq!(presentation.slides[0].title, "Overview");
    }

    #[tokio::test]
    async fn malformed_summary_falls_back_to_deterministic_strategy() {
        let assembler = PresentationAssembler::new(StubSource {
            metadata: metadata(),
            transcript: None,
        })
        .with_summarizer(Box::new(StubSummarizer {
            response: Ok("this is not json {".to_string()),
        }));

        let presentation = assembler.assemble(URL, StrategyHint::Summarize).await;
        assert_well_formed(&presentation);
        // Deterministic description path produced the deck.
        assert!(
            presentation
                .slides
                .iter()
                .any(|s| s.title == "Video Statistics")
        );
    }

    #[tokio::test]
    async fn failing_summarizer_falls_back_without_surfacing_errors() {
        let assembler = PresentationAssembler::new(StubSource {
            metadata: metadata(),
            transcript: Some("A transcript sentence. Another one after it".to_string()),
        })
        .with_summarizer(Box::new(StubSummarizer {
            response: Err(SlidecastError::SummaryFailed {
                reason: "unused".to_string(),
            }),
        }));

        let presentation = assembler.assemble(URL, StrategyHint::Summarize).await;
        assert_well_formed(&presentation);
        assert_eq!(presentation.slides[0].content[1], "Generated from YouTube transcript");
    }

    #[tokio::test]
    async fn summarizer_is_ignored_without_the_hint() {
        let assembler = PresentationAssembler::new(StubSource {
            metadata: metadata(),
            transcript: Some("A transcript sentence. Another one after it".to_string()),
        })
        .with_summarizer(Box::new(StubSummarizer {
            response: Ok(r#"{"title":"t","slides":[{"title":"s","content":["b"]}]}"#.to_string()),
        }));

        let presentation = assembler.assemble(URL, StrategyHint::Auto).await;
        assert_eq!(presentation.slides[0].content[1], "Generated from YouTube transcript");
    }

    #[tokio::test]
    async fn oversized_summary_is_bounded() {
        let slides = (0..15)
            .map(|i| format!(r#"{{"title":"S{i}","content":["a","b","c","d","e","f","g"]}}"#))
            .collect::<Vec<_>>()
            .join(",");
        let summary = format!(r#"{{"title":"Big","slides":[{slides}]}}"#);
        let assembler = PresentationAssembler::new(StubSource {
            metadata: metadata(),
            transcript: None,
        })
        .with_summarizer(Box::new(StubSummarizer {
            response: Ok(summary),
        }));

        let presentation = assembler.assemble(URL, StrategyHint::Summarize).await;
        assert_well_formed(&presentation);
        assert_eq!(presentation.slides.len(), MAX_TOTAL_SLIDES);
        for slide in &presentation.slides {
            assert!(slide.content.len() <= 5);
        }
    }
}

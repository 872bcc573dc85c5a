//! Slidecast Core Library
//!
//! Turns a YouTube video reference into a structured slide deck: resolve
//! video metadata, fetch a caption transcript when one exists, segment the
//! text, and synthesize a bounded presentation with deterministic fallbacks
//! when transcripts or AI summarization are unavailable.

pub mod assemble;
pub mod error;
pub mod format;
pub mod images;
pub mod segment;
pub mod source;
pub mod summarize;
pub mod synth;
pub mod types;
pub mod url;

// Re-export commonly used items at crate root
pub use assemble::{PresentationAssembler, StrategyHint};
pub use error::{Result, SlidecastError};
pub use format::format_presentation_readable;
pub use segment::{MAX_SEGMENTS, MAX_SEGMENT_LEN, segment_text};
pub use source::{FETCH_TIMEOUT, VideoSource, YtDlpSource};
pub use summarize::{ChatCompletionSummarizer, Provider, ProviderConfig, Summarizer};
pub use types::{Presentation, Slide, VideoMetadata, VideoProvenance};
pub use url::{extract_video_id, watch_url};

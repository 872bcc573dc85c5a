//! Slide synthesis: turn transcript segments or description paragraphs into
//! an ordered slide sequence with a fixed narrative skeleton (title slide,
//! content slides, statistics/conclusion closer).

use crate::images::{
    default_thumbnail_url, placeholder_image_url, theme_for_slide, themed_image_url,
};
use crate::types::{Slide, VideoMetadata};

/// Bullet points per content slide.
pub const MAX_BULLETS_PER_SLIDE: usize = 5;
/// Content slides synthesized from description paragraphs.
pub const MAX_DESCRIPTION_SLIDES: usize = 5;
/// Paragraphs at or under this length are treated as noise and skipped.
pub const MIN_PARAGRAPH_LEN: usize = 30;
/// Hard bound on any emitted deck: 1 title + up to 8 content + closing.
pub const MAX_TOTAL_SLIDES: usize = 10;

/// The opening slide shared by both synthesis strategies: video title,
/// by-line, a note naming the generation method, and the video thumbnail.
pub fn title_slide(metadata: &VideoMetadata, video_id: &str, provenance_note: &str) -> Slide {
    Slide {
        title: metadata.display_title().to_string(),
        content: vec![
            format!("by {}", metadata.display_author()),
            provenance_note.to_string(),
        ],
        image_description: Some("Title slide with video thumbnail".to_string()),
        image_url: Some(
            metadata
                .thumbnail_url
                .clone()
                .unwrap_or_else(|| default_thumbnail_url(video_id)),
        ),
    }
}

fn conclusion_slide(metadata: &VideoMetadata, image_url: String) -> Slide {
    Slide {
        title: "Conclusion".to_string(),
        content: vec![
            "Thank you for watching!".to_string(),
            format!("Video: {}", metadata.title.as_deref().unwrap_or("")),
            format!("Creator: {}", metadata.author.as_deref().unwrap_or("Unknown")),
        ],
        image_description: Some("Conclusion slide with thank you message".to_string()),
        image_url: Some(image_url),
    }
}

fn statistics_slide(metadata: &VideoMetadata) -> Slide {
    Slide {
        title: "Video Statistics".to_string(),
        content: vec![
            format!("Length: {} seconds", metadata.duration_seconds.unwrap_or(0)),
            format!("Views: {}", metadata.display_views()),
            format!("Channel: {}", metadata.author.as_deref().unwrap_or("Unknown")),
        ],
        image_description: None,
        image_url: Some("https://source.unsplash.com/400x300/?statistics,analytics,data".to_string()),
    }
}

/// Pair consecutive sentences of a segment into bullet candidates.
fn bullets_from_segment(segment: &str) -> Vec<String> {
    let sentences: Vec<&str> = segment.split(". ").collect();
    let mut bullets = Vec::new();
    for pair in sentences.chunks(2) {
        let combined = pair
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(". ");
        if !combined.is_empty() {
            bullets.push(combined);
        }
    }
    bullets.truncate(MAX_BULLETS_PER_SLIDE);
    bullets
}

/// Transcript-based strategy: one content slide per segment, bullets paired
/// from consecutive sentences. Segments that yield no bullets are skipped
/// entirely, so every emitted slide has non-empty content.
pub fn slides_from_segments(
    segments: &[String],
    metadata: &VideoMetadata,
    video_id: &str,
) -> Vec<Slide> {
    let mut slides = vec![title_slide(metadata, video_id, "Generated from YouTube transcript")];

    for (i, segment) in segments.iter().enumerate() {
        let bullets = bullets_from_segment(segment);
        if bullets.is_empty() {
            continue;
        }
        slides.push(Slide {
            title: format!("Point {}", i + 1),
            content: bullets,
            image_description: Some(format!("Visual representing content from slide {}", i + 1)),
            image_url: None,
        });
    }

    slides.push(conclusion_slide(metadata, placeholder_image_url("Thank You")));
    slides
}

fn usable_paragraphs(description: &str) -> Vec<&str> {
    description
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// True when the description holds at least one paragraph substantial enough
/// to become a content slide.
pub fn has_usable_paragraphs(description: &str) -> bool {
    usable_paragraphs(description)
        .iter()
        .any(|p| p.len() > MIN_PARAGRAPH_LEN)
}

/// Description-based strategy: one content slide per substantial paragraph
/// (blank-line delimited), bullets split on sentence-terminal periods, a
/// topical image theme rotated per paragraph index. Closes with the
/// statistics slide followed by the conclusion.
///
/// Note the paragraph index feeds slide numbering and theme rotation before
/// the noise filter applies, so skipped paragraphs still consume a number.
pub fn slides_from_description(
    description: &str,
    metadata: &VideoMetadata,
    video_id: &str,
) -> Vec<Slide> {
    let mut slides = vec![title_slide(metadata, video_id, "Generated automatically from YouTube")];

    let paragraphs = usable_paragraphs(description);
    for (i, paragraph) in paragraphs.iter().take(MAX_DESCRIPTION_SLIDES).enumerate() {
        if paragraph.len() <= MIN_PARAGRAPH_LEN {
            continue;
        }
        let bullets: Vec<String> = paragraph
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(MAX_BULLETS_PER_SLIDE)
            .map(str::to_string)
            .collect();
        if bullets.is_empty() {
            continue;
        }
        slides.push(Slide {
            title: format!("Point {}", i + 1),
            content: bullets,
            image_description: None,
            image_url: Some(themed_image_url(theme_for_slide(i), i)),
        });
    }

    slides.push(statistics_slide(metadata));
    slides.push(conclusion_slide(
        metadata,
        "https://source.unsplash.com/400x300/?conclusion,presentation,thank+you".to_string(),
    ));
    slides
}

/// Two-slide fallback deck for videos with no transcript and no usable
/// description: a metadata-only title slide plus an informational slide.
pub fn minimal_deck(metadata: &VideoMetadata, video_id: &str) -> Vec<Slide> {
    vec![
        Slide {
            title: metadata.display_title().to_string(),
            content: vec![
                format!("By: {}", metadata.author.as_deref().unwrap_or("Unknown")),
                "Generated automatically from video metadata".to_string(),
            ],
            image_description: Some("Title slide with video thumbnail".to_string()),
            image_url: Some(
                metadata
                    .thumbnail_url
                    .clone()
                    .unwrap_or_else(|| default_thumbnail_url(video_id)),
            ),
        },
        Slide {
            title: "About This Video".to_string(),
            content: vec![
                "No transcript was available for this video.".to_string(),
                format!("Duration: {} seconds", metadata.duration_seconds.unwrap_or(0)),
                format!("Views: {}", metadata.display_views()),
            ],
            image_description: Some("Information slide".to_string()),
            image_url: Some(placeholder_image_url("Video Info")),
        },
    ]
}

/// Normalize an externally-produced slide list (the summarization
/// collaborator is not trusted to respect the caps): blank bullets are
/// dropped, bullets capped, empty slides removed, and the deck bounded.
pub fn sanitize_slides(slides: Vec<Slide>) -> Vec<Slide> {
    let mut out: Vec<Slide> = slides
        .into_iter()
        .filter_map(|mut slide| {
            slide.content.retain(|bullet| !bullet.trim().is_empty());
            slide.content.truncate(MAX_BULLETS_PER_SLIDE);
            if slide.content.is_empty() {
                None
            } else {
                Some(slide)
            }
        })
        .collect();
    out.truncate(MAX_TOTAL_SLIDES);
    out
}

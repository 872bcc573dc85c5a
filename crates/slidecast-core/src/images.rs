//! Placeholder-image URL construction.
//!
//! No real image generation happens anywhere in the pipeline; every image
//! reference is a deterministic URL template built from the video ID, a
//! topical theme keyword, or the slide index.

use crate::types::Slide;

/// Topical themes rotated through description-based content slides.
pub const IMAGE_THEMES: [&str; 6] = [
    "technology",
    "business",
    "education",
    "innovation",
    "growth",
    "success",
];

pub fn theme_for_slide(index: usize) -> &'static str {
    IMAGE_THEMES[index % IMAGE_THEMES.len()]
}

pub fn themed_image_url(theme: &str, index: usize) -> String {
    format!("https://source.unsplash.com/400x300/?{},{}", theme, index + 1)
}

/// Highest-resolution thumbnail for a video, used when the resolved metadata
/// carries no thumbnail of its own.
pub fn default_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}

pub fn placeholder_image_url(text: &str) -> String {
    format!("https://placehold.co/600x400?text={}", text.replace(' ', "+"))
}

/// Assign a placeholder image to every slide that still lacks one.
///
/// Runs as a final pass over synthesized slides. It never fails and always
/// assigns a non-empty URL, keyed on the slide index.
pub fn assign_placeholder_images(slides: &mut [Slide]) {
    for (i, slide) in slides.iter_mut().enumerate() {
        if slide.image_url.is_none() {
            slide.image_url = Some(placeholder_image_url(&format!("Slide {}", i + 1)));
        }
    }
}

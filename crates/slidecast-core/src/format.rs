use crate::types::Presentation;

/// Format a presentation as human-readable markdown
pub fn format_presentation_readable(presentation: &Presentation) -> String {
    let mut output = String::new();

    // Title
    output.push_str(&format!("# {}\n\n", presentation.title));

    // Slides
    for (i, slide) in presentation.slides.iter().enumerate() {
        output.push_str(&format!("## Slide {}: {}\n\n", i + 1, slide.title));
        for bullet in &slide.content {
            output.push_str(&format!("• {}\n", bullet));
        }
        if let Some(image_url) = &slide.image_url {
            output.push_str(&format!("\n_Image: {}_\n", image_url));
        }
        output.push('\n');
    }

    // Provenance
    output.push_str("---\n");
    output.push_str(&format!("Source: {}\n", presentation.video_metadata.url));
    if let Some(author) = &presentation.video_metadata.author {
        output.push_str(&format!("Channel: {}\n", author));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Slide, VideoProvenance};

    #[test]
    fn readable_rendering_lists_every_slide() {
        let presentation = Presentation {
            title: "Deck".to_string(),
            slides: vec![Slide {
                title: "First".to_string(),
                content: vec!["a point".to_string()],
                image_description: None,
                image_url: Some("https://example.com/img.jpg".to_string()),
            }],
            video_metadata: VideoProvenance {
                title: "Deck".to_string(),
                author: Some("Someone".to_string()),
                url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
                thumbnail_url: None,
            },
        };
        let readable = format_presentation_readable(&presentation);
        assert!(readable.contains("# Deck"));
        assert!(readable.contains("## Slide 1: First"));
        assert!(readable.contains("• a point"));
        assert!(readable.contains("Channel: Someone"));
    }
}

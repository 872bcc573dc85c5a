/// Soft length threshold at which a segment is closed.
pub const MAX_SEGMENT_LEN: usize = 500;
/// Upper bound on emitted segments; later text is silently dropped.
pub const MAX_SEGMENTS: usize = 8;

/// Split a text body into bounded, sentence-aligned segments.
///
/// Greedy single-pass partition: sentence units (split on `". "`, with the
/// delimiter re-appended) accumulate into a buffer, and the buffer is closed
/// as a segment once it exceeds `max_segment_len`. A sentence is never split
/// across segments, so segments routinely overshoot the threshold by one
/// sentence. The trailing buffer is flushed as a final segment, and the
/// result is truncated to `max_segments`.
///
/// Empty or whitespace-only input yields an empty vec; callers must supply a
/// fallback narrative in that case.
pub fn segment_text(text: &str, max_segment_len: usize, max_segments: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();

    for sentence in text.split(". ") {
        current.push_str(sentence);
        current.push_str(". ");
        if current.len() > max_segment_len {
            segments.push(current.trim().to_string());
            current.clear();
        }
    }

    if !current.trim().is_empty() {
        segments.push(current.trim().to_string());
    }

    segments.truncate(max_segments);
    segments
}

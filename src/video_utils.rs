use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Video identifier utilities for YouTube URL handling
///
/// This module resolves the 11-character video id from the URL shapes YouTube
/// hands out (`watch?v=`, `youtu.be/`, `embed/`, `shorts/`) or accepts a bare
/// id directly.
// @const: Canonical 11-character video id
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap()
});

// @const: Id embedded in an arbitrary URL-ish string
static EMBEDDED_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)").unwrap()
});

/// Check whether a string is a well-formed video id
pub fn is_video_id(candidate: &str) -> bool {
    VIDEO_ID_REGEX.is_match(candidate)
}

/// Extract a video id from a URL or bare-id string
pub fn extract_video_id(input: &str) -> Result<String> {
    let trimmed = input.trim();

    // Bare id, no URL around it
    if is_video_id(trimmed) {
        return Ok(trimmed.to_string());
    }

    if let Ok(parsed) = Url::parse(trimmed) {
        // watch?v=<id> and any other form carrying a v query parameter
        if let Some((_, value)) = parsed.query_pairs().find(|(key, _)| key == "v") {
            if is_video_id(&value) {
                return Ok(value.to_string());
            }
        }

        // youtu.be/<id>, /embed/<id>, /shorts/<id>, /v/<id>
        if let Some(segments) = parsed.path_segments() {
            let segments: Vec<&str> = segments.collect();
            for (pos, segment) in segments.iter().enumerate() {
                let is_known_prefix = matches!(*segment, "embed" | "shorts" | "v");
                if is_known_prefix {
                    if let Some(next) = segments.get(pos + 1) {
                        if is_video_id(next) {
                            return Ok((*next).to_string());
                        }
                    }
                } else if pos == 0 && is_video_id(segment) {
                    // youtu.be puts the id as the first path segment
                    return Ok((*segment).to_string());
                }
            }
        }
    }

    // Last resort for scheme-less or otherwise unparseable inputs
    if let Some(caps) = EMBEDDED_ID_REGEX.captures(trimmed) {
        return Ok(caps[1].to_string());
    }

    Err(anyhow!("Could not extract video id from: {}", input))
}

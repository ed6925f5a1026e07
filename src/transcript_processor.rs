use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::summarizer::segmenter;
use crate::summarizer::selector::paragraph_chunks;

// @module: Caption assembly and transcript formatting

/// Number of sentences per paragraph when formatting a transcript for display
pub const DISPLAY_PARAGRAPH_SENTENCES: usize = 8;

// @const: Runs of whitespace
static MULTI_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

// @const: Space wrongly placed before punctuation
static SPACE_BEFORE_PUNCT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+([,.!?;:])").unwrap()
});

// @const: Punctuation with the following space missing
static MISSING_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([,.!?;:])([A-Za-z])").unwrap()
});

// @const: Lowercase letter opening a new sentence
static SENTENCE_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.!?])\s+([a-z])").unwrap()
});

// @struct: Single timed caption segment as delivered by a provider
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionSegment {
    // @field: Segment start offset in seconds
    pub start_secs: f64,

    // @field: Segment duration in seconds
    pub duration_secs: f64,

    // @field: Caption text, possibly HTML-escaped
    pub text: String,
}

impl CaptionSegment {
    /// Create a new caption segment
    pub fn new(start_secs: f64, duration_secs: f64, text: impl Into<String>) -> Self {
        CaptionSegment {
            start_secs,
            duration_secs,
            text: text.into(),
        }
    }
}

impl fmt::Display for CaptionSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:.2}s +{:.2}s] {}", self.start_secs, self.duration_secs, self.text)
    }
}

/// Decode the HTML entities commonly found in caption payloads
pub fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
}

/// Assemble caption segments into one normalized transcript string
///
/// Each segment is entity-decoded and trimmed, gets a terminal period when it
/// does not already end in sentence punctuation, and the joined result is
/// normalized: whitespace collapsed, stray spaces before punctuation removed,
/// missing spaces after punctuation inserted, and sentence starts capitalized.
pub fn assemble(segments: &[CaptionSegment]) -> String {
    let mut pieces: Vec<String> = Vec::with_capacity(segments.len());

    for segment in segments {
        let mut text = decode_entities(&segment.text).trim().to_string();
        if text.is_empty() {
            continue;
        }
        if !text.ends_with(['.', '!', '?']) {
            text.push('.');
        }
        pieces.push(text);
    }

    normalize(&pieces.join(" "))
}

/// Normalize already-joined transcript text
pub fn normalize(text: &str) -> String {
    let collapsed = MULTI_SPACE_REGEX.replace_all(text.trim(), " ");
    let no_stray = SPACE_BEFORE_PUNCT_REGEX.replace_all(&collapsed, "$1");
    let spaced = MISSING_SPACE_REGEX.replace_all(&no_stray, "$1 $2");
    let capitalized = SENTENCE_START_REGEX.replace_all(&spaced, |caps: &regex::Captures| {
        format!("{} {}", &caps[1], caps[2].to_uppercase())
    });

    capitalize_first(&capitalized)
}

/// Format a transcript into blank-line-separated paragraphs for display
pub fn format_for_display(transcript: &str) -> String {
    let sentences = segmenter::segment(transcript);
    let refs: Vec<&str> = sentences.iter().map(String::as_str).collect();
    paragraph_chunks(&refs, DISPLAY_PARAGRAPH_SENTENCES)
}

/// Uppercase the first letter of a string
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/*!
 * Mock caption source implementations for testing.
 *
 * This module provides mock sources that simulate different behaviors:
 * - `MockSource::working()` - Always succeeds with a small caption track
 * - `MockSource::empty()` - Succeeds but the track has no segments
 * - `MockSource::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{FetchedTranscript, TranscriptSource};
use crate::transcript_processor::CaptionSegment;

/// Behavior mode for the mock source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the configured caption track
    Working,
    /// Succeeds but returns a track with no segments
    Empty,
    /// Always fails with an error
    Failing,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
}

/// Mock caption source for testing the summarization workflow
#[derive(Debug)]
pub struct MockSource {
    /// Behavior mode
    behavior: MockBehavior,
    /// Segments returned in Working mode
    segments: Vec<CaptionSegment>,
    /// Title returned alongside the track
    title: Option<String>,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
}

impl MockSource {
    /// Create a new mock source with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            segments: default_segments(),
            title: Some("Mock Video".to_string()),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock source that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock source whose track has no segments
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a failing mock source that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create an intermittently failing mock source
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Replace the caption segments returned in Working mode
    pub fn with_segments(mut self, segments: Vec<CaptionSegment>) -> Self {
        self.segments = segments;
        self
    }

    /// Replace the title returned alongside the track
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

impl Clone for MockSource {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            segments: self.segments.clone(),
            title: self.title.clone(),
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl TranscriptSource for MockSource {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        _language: &str,
    ) -> Result<FetchedTranscript, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(FetchedTranscript {
                segments: self.segments.clone(),
                title: self.title.clone(),
            }),

            MockBehavior::Empty => Ok(FetchedTranscript {
                segments: Vec::new(),
                title: self.title.clone(),
            }),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: format!("Simulated source failure for {}", video_id),
            }),

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                    })
                } else {
                    Ok(FetchedTranscript {
                        segments: self.segments.clone(),
                        title: self.title.clone(),
                    })
                }
            }
        }
    }
}

/// A small caption track covering three sentences
fn default_segments() -> Vec<CaptionSegment> {
    vec![
        CaptionSegment::new(0.0, 2.5, "welcome to the channel"),
        CaptionSegment::new(2.5, 3.0, "today we talk about rust"),
        CaptionSegment::new(5.5, 2.0, "thanks for watching"),
    ]
}

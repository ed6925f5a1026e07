/*!
 * Caption source implementations.
 *
 * This module contains clients that can produce a caption track for a video:
 * - YouTube: scrapes the watch page and fetches the timedtext track
 * - Mock: configurable in-memory source for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::transcript_processor::CaptionSegment;

/// A caption track fetched from a source, plus whatever page metadata came along
#[derive(Debug, Clone)]
pub struct FetchedTranscript {
    /// Timed caption segments in playback order
    pub segments: Vec<CaptionSegment>,
    /// Page title, when the source could scrape one
    pub title: Option<String>,
}

/// Common trait for all caption sources
///
/// This trait defines the interface that all source implementations must
/// follow, allowing the controller to be tested against a mock source.
#[async_trait]
pub trait TranscriptSource: Send + Sync + Debug {
    /// Fetch the caption track for a video
    ///
    /// # Arguments
    /// * `video_id` - The 11-character video identifier
    /// * `language` - Preferred caption language (ISO 639-1)
    ///
    /// # Returns
    /// * `Result<FetchedTranscript, ProviderError>` - The caption track or an error
    async fn fetch_transcript(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<FetchedTranscript, ProviderError>;
}

pub mod mock;
pub mod youtube;

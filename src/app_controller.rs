use anyhow::Result;
use log::{debug, info};
use serde::Serialize;

use crate::app_config::Config;
use crate::errors::ProviderError;
use crate::providers::youtube::YouTube;
use crate::providers::TranscriptSource;
use crate::summarizer::{LogObserver, Summarizer};
use crate::transcript_processor;
use crate::video_utils;

// @module: Application controller for transcript summarization

/// Final result of a summarization run, serialized as JSON on stdout
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutput {
    /// Paragraphed extractive summary
    pub summary: String,

    /// Formatted transcript, omitted when disabled in config
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    /// Page title, omitted when the provider could not scrape one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Resolved video identifier
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Error shape serialized on stdout when a run fails
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
    /// Human-readable failure description
    pub error: String,
}

/// Main application controller for transcript summarization
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the main workflow against the configured YouTube endpoint
    pub async fn run(&self, url: &str) -> Result<SummaryOutput> {
        let source = YouTube::new_with_config(
            self.config.provider.endpoint.clone(),
            self.config.provider.timeout_secs,
            self.config.provider.max_retries,
            self.config.provider.backoff_base_ms,
        );
        self.run_with_source(url, &source).await
    }

    /// Run the workflow with an explicit caption source
    ///
    /// The source seam is what the integration tests use to drive the full
    /// pipeline without network access.
    pub async fn run_with_source(
        &self,
        url: &str,
        source: &dyn TranscriptSource,
    ) -> Result<SummaryOutput> {
        let video_id = video_utils::extract_video_id(url)?;
        info!("Summarizing video: {}", video_id);

        let fetched = source
            .fetch_transcript(&video_id, &self.config.language)
            .await?;
        if fetched.segments.is_empty() {
            return Err(ProviderError::NoCaptions(video_id).into());
        }
        debug!("Got caption track with {} segments", fetched.segments.len());

        let transcript = transcript_processor::assemble(&fetched.segments);
        debug!("Transcript length: {} characters", transcript.len());

        let summarizer = Summarizer::with_target(self.config.summary.target_sentences);
        let summary = summarizer.summarize_with_observer(&transcript, &LogObserver)?;

        let transcript_out = if self.config.summary.include_transcript {
            Some(transcript_processor::format_for_display(&transcript))
        } else {
            None
        };

        info!("Summary ready for {}", video_id);
        Ok(SummaryOutput {
            summary,
            transcript: transcript_out,
            title: fetched.title,
            video_id,
        })
    }
}

use anyhow::{anyhow, Result};
use isolang::Language;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::summarizer::DEFAULT_TARGET_SENTENCES;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Preferred caption language code (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Summary config
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Caption provider config
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Summary output settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummaryConfig {
    // @field: Maximum sentences in the summary
    #[serde(default = "default_target_sentences")]
    pub target_sentences: usize,

    // @field: Whether the formatted transcript is included in the output
    #[serde(default = "default_true")]
    pub include_transcript: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            target_sentences: default_target_sentences(),
            include_transcript: true,
        }
    }
}

/// Caption provider connection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Retry count for failed requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    // @field: Base backoff in ms, doubled on each retry
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_target_sentences() -> usize {
    DEFAULT_TARGET_SENTENCES
}

fn default_endpoint() -> String {
    "https://www.youtube.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3 // Default to 3 retries
}

fn default_backoff_base_ms() -> u64 {
    1000 // 1 second base backoff time, doubled on each retry
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate caption language
        let code = self.language.trim().to_lowercase();
        if Language::from_639_1(&code).is_none() {
            return Err(anyhow!("Invalid caption language code: {}", self.language));
        }

        // A zero budget would make selection undefined
        if self.summary.target_sentences == 0 {
            return Err(anyhow!("summary.target_sentences must be at least 1"));
        }

        if !self.provider.endpoint.starts_with("http://")
            && !self.provider.endpoint.starts_with("https://")
        {
            return Err(anyhow!(
                "Provider endpoint must be an http(s) URL: {}",
                self.provider.endpoint
            ));
        }

        if self.provider.timeout_secs == 0 {
            return Err(anyhow!("provider.timeout_secs must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            summary: SummaryConfig::default(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

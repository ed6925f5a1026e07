use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{FetchedTranscript, TranscriptSource};
use crate::transcript_processor::{decode_entities, CaptionSegment};

// @const: Timedtext XML cue
static TIMEDTEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<text start="([^"]+)" dur="([^"]+)"[^>]*>([^<]*)</text>"#).unwrap()
});

// @const: HTML title tag
static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<title>(.*?)</title>").unwrap()
});

// @const: Open Graph title meta tag
static OG_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<meta property="og:title" content="([^"]*)""#).unwrap()
});

/// YouTube client that scrapes the watch page for its caption track
pub struct YouTube {
    /// Base URL of the YouTube site
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl std::fmt::Debug for YouTube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTube")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// One caption track entry from the watch page player response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// URL of the timedtext payload for this track
    pub base_url: String,
    /// ISO 639-1 language code of the track
    #[serde(default)]
    pub language_code: String,
    /// Track kind; "asr" marks an auto-generated track
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl YouTube {
    /// Create a new YouTube client with the specified endpoint
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self::new_with_config(endpoint, timeout_secs, 3, 1000)
    }

    /// Create a new YouTube client with retry configuration
    pub fn new_with_config(
        endpoint: impl Into<String>,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        let endpoint = endpoint.into();
        let base_url = endpoint.trim_end_matches('/').to_string();

        Self {
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// GET a page as text, retrying on network and server errors
    async fn fetch_page(&self, url: &str) -> Result<String, ProviderError> {
        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let response_result = self.client.get(url).send().await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.text().await.map_err(|e| {
                            ProviderError::RequestFailed(format!(
                                "Failed to read response body from {}: {}",
                                url, e
                            ))
                        });
                    } else if status.is_server_error() {
                        // Server error - can retry
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: format!("Server error fetching {}", url),
                        });
                        error!(
                            "Server error ({}) fetching {} - attempt {}/{}",
                            status,
                            url,
                            attempt + 1,
                            self.max_retries + 1
                        );
                    } else {
                        // Client error - don't retry
                        error!("Client error ({}) fetching {}", status, url);
                        return Err(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: format!("Request rejected for {}", url),
                        });
                    }
                }
                Err(e) => {
                    // Network error - can retry
                    last_error = Some(ProviderError::RequestFailed(format!(
                        "Failed to fetch {}: {}",
                        url, e
                    )));
                    error!(
                        "Network error fetching {}: {} - attempt {}/{}",
                        url,
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                }
            }

            attempt += 1;

            // If we have more retries left, wait with exponential backoff
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "Request to {} failed after {} attempts",
                url,
                self.max_retries + 1
            ))
        }))
    }

    /// Extract the `captionTracks` array from the watch page HTML
    pub fn extract_caption_tracks(html: &str) -> Result<Vec<CaptionTrack>, ProviderError> {
        let blob = extract_json_array(html, "captionTracks").ok_or_else(|| {
            ProviderError::ParseError("No captionTracks found in watch page".to_string())
        })?;

        serde_json::from_str::<Vec<CaptionTrack>>(blob).map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse captionTracks: {}", e))
        })
    }

    /// Pick the track to fetch: preferred language first (manual tracks before
    /// auto-generated ones), otherwise the first track available
    pub fn choose_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
        tracks
            .iter()
            .find(|t| t.language_code == language && t.kind.as_deref() != Some("asr"))
            .or_else(|| tracks.iter().find(|t| t.language_code == language))
            .or_else(|| tracks.first())
    }

    /// Parse a timedtext XML payload into caption segments
    pub fn parse_timedtext(xml: &str) -> Vec<CaptionSegment> {
        TIMEDTEXT_REGEX
            .captures_iter(xml)
            .map(|caps| {
                let start = caps[1].parse::<f64>().unwrap_or(0.0);
                let duration = caps[2].parse::<f64>().unwrap_or(0.0);
                CaptionSegment::new(start, duration, caps[3].to_string())
            })
            .collect()
    }

    /// Scrape the video title from the watch page HTML
    ///
    /// Absence of a title is not an error; the summary is still produced.
    pub fn scrape_title(html: &str) -> Option<String> {
        if let Some(caps) = TITLE_REGEX.captures(html) {
            let title = decode_entities(caps[1].trim_end_matches(" - YouTube").trim());
            if !title.is_empty() {
                return Some(title);
            }
        }

        if let Some(caps) = OG_TITLE_REGEX.captures(html) {
            let title = decode_entities(caps[1].trim());
            if !title.is_empty() {
                return Some(title);
            }
        }

        None
    }
}

#[async_trait]
impl TranscriptSource for YouTube {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<FetchedTranscript, ProviderError> {
        let watch_url = format!("{}/watch?v={}", self.base_url, video_id);
        debug!("Fetching watch page: {}", watch_url);
        let html = self.fetch_page(&watch_url).await?;

        let tracks = match Self::extract_caption_tracks(&html) {
            Ok(tracks) if !tracks.is_empty() => tracks,
            Ok(_) => return Err(ProviderError::NoCaptions(video_id.to_string())),
            Err(e) => {
                warn!("Caption track extraction failed for {}: {}", video_id, e);
                return Err(ProviderError::NoCaptions(video_id.to_string()));
            }
        };
        debug!("Found {} caption track(s) for {}", tracks.len(), video_id);

        let track = Self::choose_track(&tracks, language)
            .ok_or_else(|| ProviderError::NoCaptions(video_id.to_string()))?;
        if track.language_code != language {
            warn!(
                "No '{}' caption track for {}, falling back to '{}'",
                language, video_id, track.language_code
            );
        }

        let xml = self.fetch_page(&track.base_url).await?;
        let segments = Self::parse_timedtext(&xml);
        if segments.is_empty() {
            return Err(ProviderError::NoCaptions(video_id.to_string()));
        }
        debug!("Fetched {} caption segments for {}", segments.len(), video_id);

        Ok(FetchedTranscript {
            segments,
            title: Self::scrape_title(&html),
        })
    }
}

/// Find `"key":` in `html` and return the balanced JSON array that follows it
fn extract_json_array<'a>(html: &'a str, key: &str) -> Option<&'a str> {
    let marker = format!("\"{}\":", key);
    let key_pos = html.find(&marker)?;
    let after = &html[key_pos + marker.len()..];
    let rel_start = after.find('[')?;
    let body = &after[rel_start..];

    let mut depth = 0i32;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&body[..=i]);
                }
            }
            _ => {}
        }
    }

    None
}

/*!
 * End-to-end workflow tests driving the controller through a mock caption
 * source, without network access
 */

use ytldr::app_config::Config;
use ytldr::app_controller::{Controller, ErrorOutput};
use ytldr::errors::ProviderError;
use ytldr::providers::mock::MockSource;
use ytldr::transcript_processor::CaptionSegment;

use crate::common;

/// Test the happy path: URL in, JSON-shaped output out
#[tokio::test]
async fn test_workflow_withWorkingSource_shouldProduceSummaryOutput() {
    let controller = Controller::new_for_test().unwrap();
    let source = MockSource::working().with_segments(common::caption_track(40));

    let output = controller
        .run_with_source("https://www.youtube.com/watch?v=dQw4w9WgXcQ", &source)
        .await
        .unwrap();

    assert_eq!(output.video_id, "dQw4w9WgXcQ");
    assert_eq!(output.title.as_deref(), Some("Mock Video"));
    assert_eq!(output.summary.matches('.').count(), 12);
    assert!(output.transcript.is_some());
}

/// Test that the serialized output uses the expected JSON field names
#[tokio::test]
async fn test_workflow_withWorkingSource_shouldSerializeCamelCaseVideoId() {
    let controller = Controller::new_for_test().unwrap();
    let source = MockSource::working();

    let output = controller
        .run_with_source("dQw4w9WgXcQ", &source)
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::to_value(&output).unwrap();
    assert_eq!(json["videoId"], "dQw4w9WgXcQ");
    assert!(json.get("video_id").is_none());
    assert!(json.get("summary").is_some());
}

/// Test a short transcript passing through the summarizer unchanged
#[tokio::test]
async fn test_workflow_withShortTranscript_shouldReturnFullTranscriptAsSummary() {
    let controller = Controller::new_for_test().unwrap();
    let source = MockSource::working();

    let output = controller
        .run_with_source("dQw4w9WgXcQ", &source)
        .await
        .unwrap();

    assert_eq!(
        output.summary,
        "Welcome to the channel. Today we talk about rust. Thanks for watching."
    );
}

/// Test that disabling the transcript in config omits it from the output
#[tokio::test]
async fn test_workflow_withTranscriptDisabled_shouldOmitTranscript() {
    let mut config = Config::default();
    config.summary.include_transcript = false;
    let controller = Controller::with_config(config).unwrap();
    let source = MockSource::working();

    let output = controller
        .run_with_source("dQw4w9WgXcQ", &source)
        .await
        .unwrap();

    assert!(output.transcript.is_none());
    let json = serde_json::to_string(&output).unwrap();
    assert!(!json.contains("\"transcript\""));
}

/// Test that a configured target is honored end to end
#[tokio::test]
async fn test_workflow_withCustomTarget_shouldHonorConfiguredBudget() {
    let mut config = Config::default();
    config.summary.target_sentences = 5;
    let controller = Controller::with_config(config).unwrap();
    let source = MockSource::working().with_segments(common::caption_track(30));

    let output = controller
        .run_with_source("dQw4w9WgXcQ", &source)
        .await
        .unwrap();

    assert_eq!(output.summary.matches('.').count(), 5);
}

/// Test that a missing title stays absent rather than failing the run
#[tokio::test]
async fn test_workflow_withUntitledVideo_shouldOmitTitle() {
    let controller = Controller::new_for_test().unwrap();
    let source = MockSource::working().with_title(None);

    let output = controller
        .run_with_source("dQw4w9WgXcQ", &source)
        .await
        .unwrap();

    assert!(output.title.is_none());
    let json = serde_json::to_string(&output).unwrap();
    assert!(!json.contains("\"title\""));
}

/// Test an unresolvable URL failing before any fetch happens
#[tokio::test]
async fn test_workflow_withInvalidUrl_shouldFailWithoutFetching() {
    let controller = Controller::new_for_test().unwrap();
    let source = MockSource::working();

    // No path segment or query value resembles an 11-character id
    let result = controller
        .run_with_source("https://example.com/nope", &source)
        .await;

    let error = result.unwrap_err();
    assert!(
        error.to_string().contains("Could not extract video id"),
        "Expected an id-extraction failure, got: {}",
        error
    );
}

/// Test a source failure surfacing as a provider error
#[tokio::test]
async fn test_workflow_withFailingSource_shouldSurfaceProviderError() {
    let controller = Controller::new_for_test().unwrap();
    let source = MockSource::failing();

    let result = controller.run_with_source("dQw4w9WgXcQ", &source).await;

    let error = result.unwrap_err();
    match error.downcast_ref::<ProviderError>() {
        Some(ProviderError::ApiError { status_code, .. }) => assert_eq!(*status_code, 500),
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

/// Test a captionless video surfacing as a NoCaptions error
#[tokio::test]
async fn test_workflow_withEmptyTrack_shouldSurfaceNoCaptions() {
    let controller = Controller::new_for_test().unwrap();
    let source = MockSource::empty();

    let result = controller.run_with_source("dQw4w9WgXcQ", &source).await;

    let error = result.unwrap_err();
    match error.downcast_ref::<ProviderError>() {
        Some(ProviderError::NoCaptions(id)) => assert_eq!(id, "dQw4w9WgXcQ"),
        other => panic!("Expected NoCaptions, got {:?}", other),
    }
}

/// Test the error output shape used by the CLI
#[test]
fn test_errorOutput_serialization_shouldEmitSingleErrorField() {
    let output = ErrorOutput {
        error: "No captions available for video: dQw4w9WgXcQ".to_string(),
    };

    let json = serde_json::to_string(&output).unwrap();
    assert_eq!(
        json,
        r#"{"error":"No captions available for video: dQw4w9WgXcQ"}"#
    );
}

/// Test transcript formatting end to end with messy caption text
#[tokio::test]
async fn test_workflow_withMessyCaptions_shouldNormalizeTranscript() {
    let controller = Controller::new_for_test().unwrap();
    let segments = vec![
        CaptionSegment::new(0.0, 2.0, "it&#39;s   a test"),
        CaptionSegment::new(2.0, 2.0, "with &amp; without entities"),
    ];
    let source = MockSource::working().with_segments(segments);

    let output = controller
        .run_with_source("dQw4w9WgXcQ", &source)
        .await
        .unwrap();

    assert_eq!(output.summary, "It's a test. With & without entities.");
}

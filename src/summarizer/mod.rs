/*!
 * Extractive summarization core.
 *
 * This module contains the two summarization components and the facade that
 * ties them together:
 * - `segmenter`: splits raw text into an ordered sentence list
 * - `selector`: picks a bounded, evenly distributed subset of sentences
 * - `observer`: checkpoint hooks so the core stays pure for testing
 *
 * The whole pipeline is deterministic: the same text and target always yield
 * the same summary, and summary sentences keep their original document order.
 */

pub mod observer;
pub mod segmenter;
pub mod selector;

pub use observer::{LogObserver, NoopObserver, SummaryObserver};
pub use selector::{
    Selection, SelectorConfig, SentenceSelector, DEFAULT_TARGET_SENTENCES,
    SUMMARY_PARAGRAPH_SENTENCES,
};

use crate::errors::SummarizeError;

/// Facade over segmentation and selection
///
/// `summarize` is a pure function of the input text and the configured target:
/// no I/O, no shared state, safe to call concurrently.
#[derive(Debug, Clone)]
pub struct Summarizer {
    selector: SentenceSelector,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default target of 12 sentences
    pub fn new() -> Self {
        Self {
            selector: SentenceSelector::new(),
        }
    }

    /// Create a summarizer with a custom target sentence count
    pub fn with_target(target: usize) -> Self {
        Self {
            selector: SentenceSelector::new().with_target(target),
        }
    }

    /// Summarize `text` without observation
    pub fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        self.summarize_with_observer(text, &NoopObserver)
    }

    /// Summarize `text`, notifying `observer` at each checkpoint
    ///
    /// When the text already has no more sentences than the target, the
    /// original text is passed through unchanged rather than rejoined from
    /// segmented sentences; the two are not always byte-identical for inputs
    /// with irregular internal spacing.
    pub fn summarize_with_observer(
        &self,
        text: &str,
        observer: &dyn SummaryObserver,
    ) -> Result<String, SummarizeError> {
        if self.selector.target() == 0 {
            return Err(SummarizeError::InvalidTarget(0));
        }

        observer.on_start(text.chars().count());

        let sentences = segmenter::segment(text);
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        observer.on_segmented(sentences.len());

        // No-op fast path: the input is already within budget
        if sentences.len() <= self.selector.target() {
            observer.on_selected(sentences.len(), sentences.len());
            return Ok(text.to_string());
        }

        let selection = self.selector.select_indices(sentences.len())?;
        observer.on_selected(selection.indices.len(), sentences.len());

        self.selector.assemble(&sentences, &selection)
    }
}

use std::collections::BTreeSet;

use crate::errors::SummarizeError;

/// Default number of sentences in a summary
pub const DEFAULT_TARGET_SENTENCES: usize = 12;

/// Number of sentences per summary paragraph
pub const SUMMARY_PARAGRAPH_SENTENCES: usize = 4;

/// Configuration for extractive sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Maximum number of sentences in the output summary
    pub target_sentences: usize,
    /// Number of consecutive sentences grouped into one output paragraph
    pub paragraph_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            target_sentences: DEFAULT_TARGET_SENTENCES,
            paragraph_sentences: SUMMARY_PARAGRAPH_SENTENCES,
        }
    }
}

/// The outcome of a selection pass over a sentence list
///
/// Indices are ascending and deduplicated, so materializing them preserves
/// original document order no matter which of the three passes (intro, middle,
/// outro) contributed an index.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Selected sentence indices, sorted ascending
    pub indices: Vec<usize>,
    /// How many sentences the intro pass contributed
    pub intro_count: usize,
    /// How many sentences the outro pass contributed
    pub outro_count: usize,
}

/// Extractive sentence selector
///
/// Selects a bounded subset of sentences biased toward the introduction and
/// conclusion of the text, with the remaining budget spent on an evenly
/// strided walk over the middle section.
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a new selector with the default configuration
    pub fn new() -> Self {
        Self {
            config: SelectorConfig::default(),
        }
    }

    /// Create a selector with a custom configuration
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the target sentence count
    pub fn with_target(mut self, target: usize) -> Self {
        self.config.target_sentences = target;
        self
    }

    /// The configured target sentence count
    pub fn target(&self) -> usize {
        self.config.target_sentences
    }

    /// Compute the selected sentence indices for a list of `sentence_count` sentences
    ///
    /// When `sentence_count` does not exceed the target, every index is
    /// selected; callers treat that case as the no-op fast path. A target of
    /// zero is rejected, and an empty sentence list is an `EmptyInput` error.
    pub fn select_indices(&self, sentence_count: usize) -> Result<Selection, SummarizeError> {
        let target = self.config.target_sentences;
        if target == 0 {
            return Err(SummarizeError::InvalidTarget(0));
        }
        if sentence_count == 0 {
            return Err(SummarizeError::EmptyInput);
        }

        if sentence_count <= target {
            return Ok(Selection {
                indices: (0..sentence_count).collect(),
                intro_count: 0,
                outro_count: 0,
            });
        }

        // Intro pass: up to 3 sentences, scaled down for short texts
        let intro_count = std::cmp::min(3, sentence_count / 6);
        // Outro pass: up to 2 sentences, scaled down for short texts
        let outro_count = std::cmp::min(2, sentence_count / 8);

        let mut selected: BTreeSet<usize> = (0..intro_count).collect();
        for k in 0..outro_count {
            selected.insert(sentence_count - 1 - k);
        }

        // Middle pass: spend the remaining budget on an even stride over the
        // sentences strictly between the intro and outro regions
        let middle_budget =
            target as i64 - intro_count as i64 - outro_count as i64;
        if middle_budget > 0 && sentence_count > intro_count + outro_count {
            let middle_len = sentence_count - intro_count - outro_count;
            let step = std::cmp::max(1, middle_len / middle_budget as usize);

            let mut taken = 0usize;
            let mut offset = 0usize;
            while offset < middle_len && taken < middle_budget as usize {
                selected.insert(offset + intro_count);
                taken += 1;
                offset += step;
            }
        }

        Ok(Selection {
            indices: selected.into_iter().collect(),
            intro_count,
            outro_count,
        })
    }

    /// Materialize a selection back into sentence text, paragraphed
    ///
    /// Sentences are grouped by output position into chunks of at most
    /// `paragraph_sentences`, joined with single spaces inside a chunk and a
    /// blank line between chunks.
    pub fn assemble(
        &self,
        sentences: &[String],
        selection: &Selection,
    ) -> Result<String, SummarizeError> {
        let mut picked = Vec::with_capacity(selection.indices.len());
        for &index in &selection.indices {
            let sentence = sentences.get(index).ok_or_else(|| {
                SummarizeError::Processing(format!(
                    "Selected index {} out of range for {} sentences",
                    index,
                    sentences.len()
                ))
            })?;
            picked.push(sentence.as_str());
        }

        Ok(paragraph_chunks(&picked, self.config.paragraph_sentences))
    }
}

/// Group sentences into paragraphs of at most `chunk_size`, blank-line separated
pub fn paragraph_chunks(sentences: &[&str], chunk_size: usize) -> String {
    sentences
        .chunks(chunk_size.max(1))
        .map(|chunk| chunk.join(" "))
        .collect::<Vec<String>>()
        .join("\n\n")
}

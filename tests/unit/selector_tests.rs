/*!
 * Tests for extractive sentence selection
 */

use ytldr::errors::SummarizeError;
use ytldr::summarizer::selector::{paragraph_chunks, SelectorConfig, SentenceSelector};

use crate::common;

/// Test the reference scenario: 20 sentences, target 12
#[test]
fn test_selectIndices_withTwentySentences_shouldMatchReferenceCounts() {
    let selector = SentenceSelector::new().with_target(12);
    let selection = selector.select_indices(20).unwrap();

    // intro = min(3, 20/6) = 3, outro = min(2, 20/8) = 2, middle = 7
    assert_eq!(selection.intro_count, 3);
    assert_eq!(selection.outro_count, 2);
    assert_eq!(selection.indices.len(), 12);

    // Middle section has 15 sentences, stride 15/7 = 2 starting at index 3
    assert_eq!(
        selection.indices,
        vec![0, 1, 2, 3, 5, 7, 9, 11, 13, 15, 18, 19]
    );
}

/// Test the no-op path at the index level
#[test]
fn test_selectIndices_withFewerSentencesThanTarget_shouldSelectAll() {
    let selector = SentenceSelector::new().with_target(12);
    let selection = selector.select_indices(5).unwrap();

    assert_eq!(selection.indices, vec![0, 1, 2, 3, 4]);
}

/// Test that a zero target is rejected
#[test]
fn test_selectIndices_withZeroTarget_shouldReturnInvalidTarget() {
    let selector = SentenceSelector::new().with_target(0);
    let result = selector.select_indices(20);

    assert!(matches!(result, Err(SummarizeError::InvalidTarget(0))));
}

/// Test that an empty sentence list is rejected
#[test]
fn test_selectIndices_withZeroSentences_shouldReturnEmptyInput() {
    let selector = SentenceSelector::new();
    let result = selector.select_indices(0);

    assert!(matches!(result, Err(SummarizeError::EmptyInput)));
}

/// Test short inputs where both intro and outro counts truncate to zero
#[test]
fn test_selectIndices_withVeryShortInput_shouldSampleWholeList() {
    // 5 sentences, target 4: 5/6 = 0 intro, 5/8 = 0 outro, all 4 from the
    // stride walk over the entire list
    let selector = SentenceSelector::new().with_target(4);
    let selection = selector.select_indices(5).unwrap();

    assert_eq!(selection.intro_count, 0);
    assert_eq!(selection.outro_count, 0);
    assert_eq!(selection.indices, vec![0, 1, 2, 3]);
}

/// Test ordering, uniqueness and bounded size across a range of input sizes
#[test]
fn test_selectIndices_withVaryingSizes_shouldStaySortedUniqueAndBounded() {
    let target = 12;
    for count in 13..60 {
        let selector = SentenceSelector::new().with_target(target);
        let selection = selector.select_indices(count).unwrap();

        assert!(!selection.indices.is_empty(), "no selection for {} sentences", count);
        assert!(
            selection.indices.len() <= target,
            "selection exceeded target for {} sentences",
            count
        );
        for pair in selection.indices.windows(2) {
            assert!(pair[0] < pair[1], "indices not strictly ascending for {}", count);
        }
        for &index in &selection.indices {
            assert!(index < count, "index {} out of range for {}", index, count);
        }
    }
}

/// Test that assembled summaries keep sentences in document order
#[test]
fn test_assemble_withSelection_shouldPreserveDocumentOrder() {
    let sentences = common::numbered_sentences(30);
    let selector = SentenceSelector::new().with_target(12);
    let selection = selector.select_indices(sentences.len()).unwrap();
    let summary = selector.assemble(&sentences, &selection).unwrap();

    let numbers: Vec<usize> = summary
        .split_whitespace()
        .filter_map(|word| common::sentence_number(word))
        .collect();
    assert_eq!(numbers.len(), selection.indices.len());
    for pair in numbers.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

/// Test that assembling an out-of-range selection fails cleanly
#[test]
fn test_assemble_withOutOfRangeIndex_shouldReturnProcessingError() {
    let sentences = common::numbered_sentences(3);
    let selector = SentenceSelector::new().with_target(12);
    let mut selection = selector.select_indices(sentences.len()).unwrap();
    selection.indices.push(99);

    let result = selector.assemble(&sentences, &selection);
    assert!(matches!(result, Err(SummarizeError::Processing(_))));
}

/// Test paragraph chunking arithmetic: ceil(N/4) paragraphs
#[test]
fn test_paragraphChunks_withVariousCounts_shouldProduceCeilOverFourParagraphs() {
    for count in 1..=13 {
        let sentences: Vec<String> = common::numbered_sentences(count);
        let refs: Vec<&str> = sentences.iter().map(String::as_str).collect();
        let chunked = paragraph_chunks(&refs, 4);

        let paragraphs: Vec<&str> = chunked.split("\n\n").collect();
        assert_eq!(paragraphs.len(), count.div_ceil(4), "wrong paragraph count for {}", count);
    }
}

/// Test that sentences within a paragraph are joined by single spaces
#[test]
fn test_paragraphChunks_withFiveSentences_shouldSplitFourAndOne() {
    let chunked = paragraph_chunks(&["A.", "B.", "C.", "D.", "E."], 4);
    assert_eq!(chunked, "A. B. C. D.\n\nE.");
}

/// Test the config defaults
#[test]
fn test_selectorConfig_withDefaults_shouldTargetTwelve() {
    let config = SelectorConfig::default();
    assert_eq!(config.target_sentences, 12);
    assert_eq!(config.paragraph_sentences, 4);
}

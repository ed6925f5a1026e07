/*!
 * Observer hooks for summarization checkpoints.
 *
 * The core stays a pure function of its input; anything that wants to watch
 * progress (logging, test assertions) implements this trait and gets notified
 * at the three well-defined checkpoints instead of the core logging globally.
 */

use log::debug;

/// Receives notifications at summarization checkpoints
pub trait SummaryObserver {
    /// Summarization is starting on a text of `text_chars` characters
    fn on_start(&self, text_chars: usize) {
        let _ = text_chars;
    }

    /// Segmentation finished with `sentence_count` sentences
    fn on_segmented(&self, sentence_count: usize) {
        let _ = sentence_count;
    }

    /// Selection finished, keeping `selected` of `total` sentences
    fn on_selected(&self, selected: usize, total: usize) {
        let _ = (selected, total);
    }
}

/// Observer that ignores every checkpoint
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SummaryObserver for NoopObserver {}

/// Observer that forwards checkpoints to the `log` facade at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SummaryObserver for LogObserver {
    fn on_start(&self, text_chars: usize) {
        debug!("Summarizing text of {} characters", text_chars);
    }

    fn on_segmented(&self, sentence_count: usize) {
        debug!("Split into {} sentences", sentence_count);
    }

    fn on_selected(&self, selected: usize, total: usize) {
        debug!("Selected {} of {} sentences", selected, total);
    }
}

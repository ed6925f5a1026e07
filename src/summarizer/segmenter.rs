/// Sentence segmentation for transcript text
///
/// A sentence boundary sits immediately after one of `.`, `!` or `?` when the
/// mark is followed by whitespace (discarded) or directly by a letter (kept as
/// the start of the next sentence, the "bad spacing" case). A mark followed by
/// a digit or further punctuation is not a boundary, so decimal numbers and
/// `?!` clusters stay intact. There is no disambiguation for abbreviations or
/// quoted speech; that is a documented limitation of the splitting rule.
pub fn segment(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0usize;

    for (i, c) in text.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        let after = i + c.len_utf8();
        let rest = &text[after..];
        let ws_len: usize = rest
            .chars()
            .take_while(|r| r.is_whitespace())
            .map(|r| r.len_utf8())
            .sum();
        let next_is_alpha = rest
            .chars()
            .next()
            .is_some_and(|r| r.is_alphabetic());

        if ws_len == 0 && !next_is_alpha {
            continue;
        }

        let sentence = text[start..after].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = after + ws_len;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

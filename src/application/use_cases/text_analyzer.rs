use std::collections::HashMap;

use crate::domain::summary::{TextDocument, TextSummary, WordFrequency};

/// Word and character counts plus the most frequent raw tokens.
/// Blank text yields `None`, the "no content" state.
pub fn summarize(document: &TextDocument, limit: usize) -> Option<TextSummary> {
    if document.is_blank() {
        return None;
    }

    let text = &document.raw_text;
    Some(TextSummary {
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
        top_words: top_words(text, limit),
    })
}

/// Whitespace tokens as they appear (no case folding, no punctuation or
/// stop-word removal), by count descending, ties in first-appearance order
pub fn top_words(text: &str, limit: usize) -> Vec<WordFrequency> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in text.split_whitespace() {
        match index.get(token) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordFrequency {
            word: word.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(words: &[WordFrequency]) -> Vec<(&str, usize)> {
        words.iter().map(|w| (w.word.as_str(), w.count)).collect()
    }

    #[test]
    fn test_counts_and_frequencies() {
        let summary = summarize(&TextDocument::new("cat dog cat bird cat dog"), 10).unwrap();
        assert_eq!(summary.word_count, 6);
        assert_eq!(summary.char_count, 24);
        assert_eq!(pairs(&summary.top_words), vec![("cat", 3), ("dog", 2), ("bird", 1)]);
    }

    #[test]
    fn test_tokens_are_raw() {
        let words = top_words("The the THE the. the", 10);
        assert_eq!(pairs(&words), vec![("the", 2), ("The", 1), ("THE", 1), ("the.", 1)]);
    }

    #[test]
    fn test_limit_and_tie_order() {
        let text = "k l m n o p q r s t u v w x y z k";
        let words = top_words(text, 10);
        assert_eq!(words.len(), 10);
        assert_eq!(words[0].word, "k");
        assert_eq!(words[1].word, "l");
        assert_eq!(words[9].word, "t");
        assert!(words.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_whitespace_kinds_and_unicode_chars() {
        let summary = summarize(&TextDocument::new("çay\tşeker\nçay "), 10).unwrap();
        assert_eq!(summary.word_count, 3);
        assert_eq!(summary.char_count, 14);
        assert_eq!(summary.top_words[0].word, "çay");
    }

    #[test]
    fn test_blank_text_has_no_summary() {
        assert!(summarize(&TextDocument::new(""), 10).is_none());
        assert!(summarize(&TextDocument::new("  \n "), 10).is_none());
    }
}

//! Shared text utilities for diagram rendering
//!
//! This module contains the note word-wrap routine used by the PlantUML
//! renderers.

/// Default soft line width for wrapped note text.
pub const DEFAULT_NOTE_WRAP_THRESHOLD: usize = 30;

/// Greedily wrap note text into soft lines of roughly `threshold` characters.
///
/// The text is split on single spaces and words are accumulated onto the
/// current line with a running counter (word length plus one per word). Once
/// the counter reaches or passes `threshold` the line is flushed and the
/// counter resets. Words are never split, so lines may exceed the threshold.
///
/// # Example
/// ```
/// use cartograph::core::wrap_note;
///
/// let lines = wrap_note("a vision statement that is long enough to wrap", 30);
/// assert!(lines.len() > 1);
/// ```
pub fn wrap_note(text: &str, threshold: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut counter = 0;

    for word in text.split(' ') {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
        counter += word.chars().count() + 1;
        if counter >= threshold {
            lines.push(std::mem::take(&mut line));
            counter = 0;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        let result = wrap_note("short text", 30);
        assert_eq!(result, vec!["short text"]);
    }

    #[test]
    fn test_wrap_flushes_at_threshold() {
        let result = wrap_note("alpha beta gamma delta epsilon zeta eta", 30);
        assert_eq!(result, vec!["alpha beta gamma delta epsilon", "zeta eta"]);
    }

    #[test]
    fn test_wrap_counter_resets_per_line() {
        // Counters per word: 5, 10, 15, 20, 25, 30 -> flush, then 5, 10.
        let result = wrap_note("aaaa bbbb cccc dddd eeee ffff gggg hhhh", 30);
        assert_eq!(result, vec!["aaaa bbbb cccc dddd eeee ffff", "gggg hhhh"]);
    }

    #[test]
    fn test_wrap_never_splits_words() {
        let result = wrap_note("supercalifragilisticexpialidocious again", 30);
        assert_eq!(result, vec!["supercalifragilisticexpialidocious", "again"]);
    }

    #[test]
    fn test_wrap_reconstructs_original() {
        let original = "a vision statement that is long enough to wrap onto several lines";
        let lines = wrap_note(original, 30);
        assert_eq!(lines.join(" "), original);
    }

    #[test]
    fn test_wrap_empty_text() {
        let result = wrap_note("", 30);
        assert!(result.is_empty());
    }

    #[test]
    fn test_wrap_threshold_one_flushes_every_word() {
        let result = wrap_note("one two three", 1);
        assert_eq!(result, vec!["one", "two", "three"]);
    }
}

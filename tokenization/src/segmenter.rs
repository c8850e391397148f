//! Deterministic fallback segmenters.
//!
//! One parameterized scanner covers all three fallback families; each backend
//! selects a rule set instead of duplicating scan logic. All segmenters are
//! pure functions of the input text.

/// Diagnostic token emitted when segmentation produces nothing at all.
pub const SENTINEL: &str = "[Tokenization failed]";

/// Word-start marker glyph, mimicking SentencePiece output conventions.
pub const WORD_MARKER: char = '\u{2581}';

/// Rule set driving the shared segmentation scanner.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRules {
    /// Characters that force a token boundary and become their own token.
    pub punctuation: &'static [char],
    /// Drop plain `' '` silently instead of emitting it as a token.
    /// Other whitespace (tabs, newlines) is always emitted.
    pub consume_space: bool,
    /// Accumulated runs longer than this many chars are split into a 2-char
    /// prefix token plus a remainder token (crude subword surrogate).
    pub split_threshold: Option<usize>,
    /// Glyph prefixed to word tokens to mark a word boundary.
    pub word_marker: Option<char>,
}

impl SegmentRules {
    /// BPE surrogate: whitespace-delimited runs, long runs split at 2 chars.
    pub const CHAR_CHUNK: SegmentRules = SegmentRules {
        punctuation: &[],
        consume_space: false,
        split_threshold: Some(3),
        word_marker: None,
    };

    /// SentencePiece surrogate: sentence punctuation isolated, word tokens
    /// prefixed with the word-start marker, whitespace kept as unprefixed
    /// tokens so concatenation (minus markers) reconstructs the input.
    pub const SENTENCE_MARKER: SegmentRules = SegmentRules {
        punctuation: &['.', ',', '!', '?', ';', ':'],
        consume_space: false,
        split_threshold: None,
        word_marker: Some(WORD_MARKER),
    };

    /// Word-level surrogate: extended punctuation set including brackets and
    /// quotes, plain spaces consumed, other whitespace preserved as tokens.
    pub const WORD_LEVEL: SegmentRules = SegmentRules {
        punctuation: &[
            '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
        ],
        consume_space: true,
        split_threshold: None,
        word_marker: None,
    };
}

/// Segment `text` according to `rules`.
///
/// Guarantees: no empty token is ever emitted, a trailing run is always
/// flushed, and the result is never an empty sequence (a sentinel token is
/// substituted if scanning yields nothing).
pub fn segment(text: &str, rules: &SegmentRules) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buf = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            flush(&mut tokens, &mut buf, rules);
            if !(rules.consume_space && ch == ' ') {
                tokens.push(ch.to_string());
            }
        } else if rules.punctuation.contains(&ch) {
            flush(&mut tokens, &mut buf, rules);
            tokens.push(ch.to_string());
        } else {
            buf.push(ch);
        }
    }
    flush(&mut tokens, &mut buf, rules);

    if let Some(marker) = rules.word_marker {
        for token in tokens.iter_mut() {
            if is_word_token(token, rules) {
                token.insert(0, marker);
            }
        }
    }

    if tokens.is_empty() {
        tokens.push(SENTINEL.to_string());
    }
    tokens
}

/// Flush the accumulated run, applying the length-based subword split.
fn flush(tokens: &mut Vec<String>, buf: &mut String, rules: &SegmentRules) {
    if buf.is_empty() {
        return;
    }
    match rules.split_threshold {
        Some(limit) if buf.chars().count() > limit => {
            let head: String = buf.chars().take(2).collect();
            let tail: String = buf.chars().skip(2).collect();
            tokens.push(head);
            tokens.push(tail);
            buf.clear();
        }
        _ => tokens.push(std::mem::take(buf)),
    }
}

/// Word tokens get the marker; whitespace and punctuation tokens do not.
fn is_word_token(token: &str, rules: &SegmentRules) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(first), None) => !first.is_whitespace() && !rules.punctuation.contains(&first),
        (Some(first), Some(_)) => !first.is_whitespace(),
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_chunk_splits_long_runs() {
        let tokens = segment("Hello world", &SegmentRules::CHAR_CHUNK);
        assert_eq!(tokens, ["He", "llo", " ", "wo", "rld"]);
    }

    #[test]
    fn char_chunk_keeps_short_runs_whole() {
        let tokens = segment("ab abc", &SegmentRules::CHAR_CHUNK);
        assert_eq!(tokens, ["ab", " ", "abc"]);
    }

    #[test]
    fn char_chunk_split_shape() {
        // Any run longer than 3 chars becomes a 2-char head plus a remainder
        // of length >= 2.
        for word in ["abcd", "abcde", "extraordinarily"] {
            let tokens = segment(word, &SegmentRules::CHAR_CHUNK);
            assert_eq!(tokens.len(), 2, "{word:?}");
            assert_eq!(tokens[0].chars().count(), 2);
            assert!(tokens[1].chars().count() >= 2);
        }
    }

    #[test]
    fn char_chunk_flushes_trailing_run() {
        let tokens = segment("hi", &SegmentRules::CHAR_CHUNK);
        assert_eq!(tokens, ["hi"]);
    }

    #[test]
    fn sentence_marker_hello_world() {
        let tokens = segment("Hello, world!", &SegmentRules::SENTENCE_MARKER);
        assert_eq!(tokens, ["\u{2581}Hello", ",", " ", "\u{2581}world", "!"]);
    }

    #[test]
    fn sentence_marker_preserves_non_space_whitespace_unprefixed() {
        let tokens = segment("a\nb", &SegmentRules::SENTENCE_MARKER);
        assert_eq!(tokens, ["\u{2581}a", "\n", "\u{2581}b"]);
    }

    #[test]
    fn sentence_marker_concatenation_reconstructs_input() {
        // Stripping the marker reconstructs the input exactly; spaces survive
        // as their own unprefixed tokens.
        for input in ["Hello, world! Again.", "a b\tc\nd", "no-punct here"] {
            let tokens = segment(input, &SegmentRules::SENTENCE_MARKER);
            let rebuilt: String = tokens
                .iter()
                .map(|t| t.strip_prefix(WORD_MARKER).unwrap_or(t))
                .collect();
            assert_eq!(rebuilt, input);
        }
    }

    #[test]
    fn word_level_space_consumed_tab_preserved() {
        assert_eq!(segment("a b", &SegmentRules::WORD_LEVEL), ["a", "b"]);
        assert_eq!(segment("a\tb", &SegmentRules::WORD_LEVEL), ["a", "\t", "b"]);
    }

    #[test]
    fn word_level_isolates_brackets_and_quotes() {
        let tokens = segment("(\"hi\")", &SegmentRules::WORD_LEVEL);
        assert_eq!(tokens, ["(", "\"", "hi", "\"", ")"]);
    }

    #[test]
    fn word_level_concatenation_without_spaces() {
        let input = "don't\tstop.{x}[y]";
        let tokens = segment(input, &SegmentRules::WORD_LEVEL);
        let rebuilt: String = tokens.concat();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn empty_input_yields_sentinel() {
        for rules in [
            SegmentRules::CHAR_CHUNK,
            SegmentRules::SENTENCE_MARKER,
            SegmentRules::WORD_LEVEL,
        ] {
            assert_eq!(segment("", &rules), [SENTINEL]);
        }
    }

    #[test]
    fn all_spaces_yield_sentinel_when_consumed() {
        assert_eq!(segment("   ", &SegmentRules::WORD_LEVEL), [SENTINEL]);
    }

    #[test]
    fn no_empty_tokens_ever() {
        let inputs = ["", " ", "  a  ", "a.b,c", "\t\n", "word word word"];
        for rules in [
            SegmentRules::CHAR_CHUNK,
            SegmentRules::SENTENCE_MARKER,
            SegmentRules::WORD_LEVEL,
        ] {
            for input in inputs {
                let tokens = segment(input, &rules);
                assert!(!tokens.is_empty());
                assert!(tokens.iter().all(|t| !t.is_empty()), "{input:?}");
            }
        }
    }

    #[test]
    fn segmentation_is_deterministic() {
        let input = "The quick brown fox, jumps!\tover";
        for rules in [
            SegmentRules::CHAR_CHUNK,
            SegmentRules::SENTENCE_MARKER,
            SegmentRules::WORD_LEVEL,
        ] {
            assert_eq!(segment(input, &rules), segment(input, &rules));
        }
    }
}

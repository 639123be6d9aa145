use std::collections::HashSet;

/// Set of tokens excluded from cleaned output.
///
/// Lookups always receive the lowercase form of a word.
pub trait StopWords {
    fn contains(&self, word: &str) -> bool;
}

impl StopWords for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl StopWords for HashSet<&str> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<T: StopWords + ?Sized> StopWords for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Emoji code-point ranges stripped from tokens (faces, pictographs,
/// transport, flags, dingbats, enclosed characters).
const EMOJI_RANGES: [(u32, u32); 6] = [
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2700, 0x27BF),
    (0x24C2, 0x1F251),
];

/// Digit code points outside ASCII: superscripts, subscripts, circled
/// digits and the common native decimal scripts. Fractions and roman
/// numerals are not digits and survive cleaning.
const DIGIT_RANGES: [(u32, u32); 10] = [
    (0x00B2, 0x00B3),
    (0x00B9, 0x00B9),
    (0x2070, 0x2070),
    (0x2074, 0x2079),
    (0x2080, 0x2089),
    (0x2460, 0x2468),
    (0x0660, 0x0669),
    (0x06F0, 0x06F9),
    (0x0966, 0x096F),
    (0xFF10, 0xFF19),
];

fn is_digit(ch: char) -> bool {
    let code = u32::from(ch);
    ch.is_ascii_digit()
        || DIGIT_RANGES
            .iter()
            .any(|(start, end)| (*start..=*end).contains(&code))
}

fn is_emoji(ch: char) -> bool {
    let code = u32::from(ch);
    EMOJI_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&code))
}

/// Reduce a word to its canonical token. An empty result means "drop".
///
/// Stop words short-circuit before any character stripping, so a stop word
/// with trailing punctuation (`"the,"`) is only caught if it is listed in
/// that form.
pub fn clean_token<S>(word: &str, stopwords: &S) -> String
where
    S: StopWords + ?Sized,
{
    let lowered = word.to_lowercase();
    if stopwords.contains(&lowered) {
        return String::new();
    }

    lowered
        .chars()
        .filter(|ch| !is_digit(*ch))
        .filter(|ch| !ch.is_ascii_punctuation())
        .filter(|ch| !is_emoji(*ch))
        .collect()
}

/// Whitespace-split a sentence and keep the non-empty cleaned tokens, in order.
pub fn clean_sentence<S>(sentence: &str, stopwords: &S) -> Vec<String>
where
    S: StopWords + ?Sized,
{
    sentence
        .split_whitespace()
        .map(|word| clean_token(word, stopwords))
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnglishStopWords;

    #[test]
    fn lowercases_and_strips_noise() {
        let stopwords = EnglishStopWords::new();
        assert_eq!(clean_token("AAPL!", &stopwords), "aapl");
        assert_eq!(clean_token("10%", &stopwords), "");
        assert_eq!(clean_token("Q3's", &stopwords), "qs");
        assert_eq!(clean_token("moon🚀🚀", &stopwords), "moon");
        assert_eq!(clean_token("✨gains✨", &stopwords), "gains");
    }

    #[test]
    fn only_digit_characters_are_removed() {
        let stopwords = EnglishStopWords::new();
        assert_eq!(clean_token("½x", &stopwords), "½x");
        assert_eq!(clean_token("x²", &stopwords), "x");
        assert_eq!(clean_token("①st", &stopwords), "st");
        assert_eq!(clean_token("٣٠", &stopwords), "");
        assert_eq!(clean_token("１２３", &stopwords), "");
    }

    #[test]
    fn stop_words_short_circuit() {
        let stopwords = EnglishStopWords::new();
        assert_eq!(clean_token("The", &stopwords), "");
        assert_eq!(clean_token("I", &stopwords), "");
        // Punctuation is stripped after the stop-word check.
        assert_eq!(clean_token("the,", &stopwords), "the");
    }

    #[test]
    fn custom_stop_word_sets_are_supported() {
        let stopwords: HashSet<&str> = ["spot"].into_iter().collect();
        assert_eq!(clean_token("SPOT", &stopwords), "");
        assert_eq!(clean_token("the", &stopwords), "the");
    }

    #[test]
    fn cleaning_never_grows_ascii_or_emoji_words() {
        let stopwords = EnglishStopWords::new();
        for word in ["", "A", "hello", "$TSLA", "12.5%", "🚀🚀🚀", "to", "YOLO!!!", "x😀y"] {
            let cleaned = clean_token(word, &stopwords);
            assert!(cleaned.len() <= word.len(), "{word:?} -> {cleaned:?}");
        }
    }

    #[test]
    fn sentence_keeps_order_and_drops_empties() {
        let stopwords = EnglishStopWords::new();
        assert_eq!(
            clean_sentence("I love AAPL", &stopwords),
            ["love", "aapl"]
        );
        assert_eq!(
            clean_sentence("  Tesla   is 🚀 going UP 100%  ", &stopwords),
            ["tesla", "going"]
        );
        assert!(clean_sentence("", &stopwords).is_empty());
    }
}

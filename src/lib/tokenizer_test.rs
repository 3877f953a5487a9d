#[cfg(test)]
pub mod tests {
    use crate::tokenizer::{Tokens, WordTable, is_word_byte, scan};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rstest_reuse;
    use rstest_reuse::*;

    // Helper to turn expected pairs into a sorted, owned list
    pub fn words(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
        let mut out: Vec<(String, u64)> = pairs.iter().map(|&(w, c)| (w.to_string(), c)).collect();
        out.sort();
        out
    }

    pub fn table_words(table: &WordTable) -> Vec<(String, u64)> {
        let mut out: Vec<(String, u64)> = table.iter().map(|(w, c)| (w.to_string(), c)).collect();
        out.sort();
        out
    }

    // Template: texts with their exact word frequencies
    // Reused by the whole-pipeline tests in counter_test.rs
    #[template]
    #[rstest]
    // Empty and separator-only input
    #[case::empty("", &[])]
    #[case::single_space(" ", &[])]
    #[case::whitespace_only("  \n\t \r\n ", &[])]
    #[case::punctuation_only(".,;:!?-()", &[])]
    // Single words
    #[case::single_word("hello", &[("hello", 1)])]
    #[case::single_word_padded("  hello  ", &[("hello", 1)])]
    #[case::repeated_word("echo echo echo", &[("echo", 3)])]
    // Sentences
    #[case::cat_sentence(
        "the cat sat on the mat",
        &[("cat", 1), ("mat", 1), ("on", 1), ("sat", 1), ("the", 2)]
    )]
    #[case::words_with_newlines("one\ntwo\nthree\n", &[("one", 1), ("three", 1), ("two", 1)])]
    #[case::words_with_tabs_and_cr("a\tb\r\nc", &[("a", 1), ("b", 1), ("c", 1)])]
    // Case is preserved
    #[case::case_sensitive("The the THE", &[("THE", 1), ("The", 1), ("the", 1)])]
    // Apostrophes are word characters
    #[case::contractions("don't can't don't", &[("can't", 1), ("don't", 2)])]
    #[case::quoted("'tis 'quoted'", &[("'quoted'", 1), ("'tis", 1)])]
    #[case::lone_apostrophes("' ''", &[("'", 1), ("''", 1)])]
    // Digits are word characters
    #[case::digits("route 66 and 66", &[("66", 2), ("and", 1), ("route", 1)])]
    #[case::mixed_alnum("r2d2 c3po", &[("c3po", 1), ("r2d2", 1)])]
    // Punctuation splits words
    #[case::punctuation("hello, world! hello.", &[("hello", 2), ("world", 1)])]
    #[case::hyphenated("well-known", &[("known", 1), ("well", 1)])]
    #[case::underscore("snake_case", &[("case", 1), ("snake", 1)])]
    // Bytes with the high bit set split words
    #[case::utf8_accent("café", &[("caf", 1)])]
    #[case::utf8_inside_word("naïve", &[("na", 1), ("ve", 1)])]
    #[case::utf8_emoji_between("hi💯there", &[("hi", 1), ("there", 1)])]
    pub fn common_frequency_cases(#[case] input: &str, #[case] expected: &[(&str, u64)]) {}

    #[apply(common_frequency_cases)]
    fn test_scan_whole_buffer(input: &str, expected: &[(&str, u64)]) {
        let table = scan(input.as_bytes(), 0, input.len());
        assert_eq!(table_words(&table), words(expected));
    }

    #[apply(common_frequency_cases)]
    fn test_tokens_agree_with_scan(input: &str, expected: &[(&str, u64)]) {
        let total: u64 = expected.iter().map(|&(_, c)| c).sum();
        assert_eq!(Tokens::new(input.as_bytes()).count() as u64, total);
    }

    #[rstest]
    #[case::letters_lower(b'a', true)]
    #[case::letters_upper(b'Z', true)]
    #[case::digit(b'7', true)]
    #[case::apostrophe(b'\'', true)]
    #[case::space(b' ', false)]
    #[case::newline(b'\n', false)]
    #[case::nul(0, false)]
    #[case::hyphen(b'-', false)]
    #[case::underscore(b'_', false)]
    #[case::backtick(b'`', false)]
    #[case::high_bit_lead(0xC3, false)]
    #[case::high_bit_max(0xFF, false)]
    fn test_is_word_byte(#[case] byte: u8, #[case] expected: bool) {
        assert_eq!(is_word_byte(byte), expected, "byte: {:#04x}", byte);
    }

    #[rstest]
    #[case::full_window(0, 22, &[("cat", 1), ("mat", 1), ("on", 1), ("sat", 1), ("the", 2)])]
    #[case::prefix(0, 7, &[("cat", 1), ("the", 1)])]
    #[case::middle(8, 14, &[("on", 1), ("sat", 1)])]
    // A window that cuts a word counts the visible part only
    #[case::cut_word(0, 6, &[("ca", 1), ("the", 1)])]
    #[case::end_past_buffer(15, 1000, &[("mat", 1), ("the", 1)])]
    #[case::empty_window(5, 5, &[])]
    #[case::inverted_window(10, 4, &[])]
    #[case::begin_past_buffer(50, 60, &[])]
    fn test_scan_window(#[case] begin: usize, #[case] end: usize, #[case] expected: &[(&str, u64)]) {
        let buffer = b"the cat sat on the mat";
        let table = scan(buffer, begin, end);
        assert_eq!(table_words(&table), words(expected));
    }

    #[test]
    fn test_scan_stops_at_nul() {
        let buffer = b"alpha beta\0gamma delta";
        let table = scan(buffer, 0, buffer.len());
        assert_eq!(table_words(&table), words(&[("alpha", 1), ("beta", 1)]));
    }

    #[test]
    fn test_scan_nul_before_window_is_ignored() {
        let buffer = b"\0alpha beta";
        let table = scan(buffer, 1, buffer.len());
        assert_eq!(table_words(&table), words(&[("alpha", 1), ("beta", 1)]));
    }

    #[test]
    fn test_word_table_accounting() {
        let table: WordTable = ["b", "a", "b", "c", "b"].into_iter().collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5);
        assert_eq!(table.get("b"), Some(3));
        assert_eq!(table.get("missing"), None);
        assert!(!table.is_empty());
        assert!(WordTable::new().is_empty());
    }

    #[test]
    fn test_tokens_yield_in_source_order() {
        let tokens: Vec<&[u8]> = Tokens::new(b"  zeta, alpha--beta'  ").collect();
        assert_eq!(tokens, vec![&b"zeta"[..], &b"alpha"[..], &b"beta'"[..]]);
    }
}

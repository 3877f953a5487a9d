#![no_main]

use libfuzzer_sys::fuzz_target;
use wordfreq_rs::scan;
use wordfreq_rs::tokenizer::{Tokens, is_word_byte};

fuzz_target!(|data: &[u8]| {
    // Scanning arbitrary bytes must not panic, and every token must be made of
    // word bytes only
    let table = scan(data, 0, data.len());

    let tokens: Vec<&[u8]> = Tokens::new(data).collect();
    assert_eq!(table.total(), tokens.len() as u64, "token count mismatch");

    for token in &tokens {
        assert!(!token.is_empty(), "empty token");
        assert!(token.iter().all(|&b| is_word_byte(b)), "non-word byte in token");
    }

    // Arbitrary windows, including out of range ones
    if data.len() >= 2 {
        let begin = data[0] as usize;
        let end = begin + data[1] as usize;
        let _ = scan(data, begin, end);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordfreq_rs::{ReadAhead, count_bytes, count_source};

fuzz_target!(|data: &[u8]| {
    // Splitting the input into any number of chunks must count exactly what a
    // single sequential pass counts. The first byte picks the worker count.
    let Some((&selector, text)) = data.split_first() else {
        return;
    };
    // Scanning stops at NUL, which would make chunked and sequential runs differ
    if text.contains(&0) {
        return;
    }

    let workers = (selector as usize % 32) + 1;
    let sequential = count_bytes(text, 1).expect("in-memory count cannot fail");
    let parallel = count_bytes(text, workers).expect("in-memory count cannot fail");
    assert_eq!(sequential, parallel, "{workers} workers disagree with one");

    // A growable margin starting from nothing must reach the same answer
    let tiny = count_source(text, workers, ReadAhead::Growable { initial: 0 })
        .expect("in-memory count cannot fail");
    assert_eq!(sequential, tiny.merged, "growable margin from zero disagrees");
});

// Library interface for wordfreq-rs
// Exposes chunked parallel word counting for the CLI, fuzz targets and external crates

pub mod aligner;
pub mod config;
pub mod counter;
pub mod error;
pub mod merger;
pub mod planner;
pub mod pool;
pub mod report;
pub mod source;
pub mod timing;
pub mod tokenizer;

// Templates from tokenizer_test are applied by the other test modules
#[cfg(test)]
mod tokenizer_test;

#[cfg(test)]
mod config_test;

pub use aligner::{AlignedRange, LONGEST_WORD, ReadAhead, align};
pub use config::{CounterConfig, JobFile, SortOrder, default_workers};
pub use counter::{CountOutcome, WordCounter, count_source};
pub use error::{Result, WordCountError};
pub use merger::{MergedTable, RankedEntry, merge_by_count, merge_by_word};
pub use planner::{Range, plan};
pub use pool::WorkerPool;
pub use source::{ByteSource, FileSource};
pub use timing::RunTimings;
pub use tokenizer::{WordTable, is_word_byte, scan};

/// Count the words of an in-memory buffer with `workers` parallel chunks.
///
/// # Example
/// ```
/// use wordfreq_rs::count_bytes;
///
/// let merged = count_bytes(b"the cat sat on the mat", 2)?;
/// assert_eq!(merged.get("the"), Some(2));
/// assert_eq!(merged.get("sat"), Some(1));
/// assert_eq!(merged.len(), 5);
/// # Ok::<(), wordfreq_rs::WordCountError>(())
/// ```
pub fn count_bytes(bytes: &[u8], workers: usize) -> Result<MergedTable> {
    count_source(bytes, workers, ReadAhead::default()).map(|outcome| outcome.merged)
}

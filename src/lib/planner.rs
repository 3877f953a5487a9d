use crate::error::{Result, WordCountError};

/// Half-open byte span `[start, end)` of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: u64,
    pub end: u64,
}

impl Range {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "range start {start} past end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `file_size` bytes into `worker_count` contiguous ranges.
///
/// Every range but the last is `file_size / worker_count` bytes long; the last one
/// absorbs the remainder, so the ranges cover `[0, file_size)` exactly once. When
/// there are more workers than bytes the leading ranges are empty.
pub fn plan(file_size: u64, worker_count: usize) -> Result<Vec<Range>> {
    if worker_count == 0 {
        return Err(WordCountError::InvalidConfiguration(
            "worker count must be at least 1".to_string(),
        ));
    }

    let workers = worker_count as u64;
    let chunk = file_size / workers;

    Ok((0..workers)
        .map(|rank| {
            let start = rank * chunk;
            let end = if rank == workers - 1 {
                file_size
            } else {
                start + chunk
            };
            Range::new(start, end)
        })
        .collect())
}

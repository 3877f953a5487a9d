use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::aligner::{AlignedRange, ChunkBuffer, ReadAhead, align};
use crate::error::{Result, WordCountError};
use crate::planner::Range;
use crate::source::ByteSource;
use crate::timing::ChunkStamps;
use crate::tokenizer::{WordTable, scan};

/// What one worker produced for its chunk.
#[derive(Debug, Clone)]
pub struct ChunkResult {
    pub aligned: AlignedRange,
    pub table: WordTable,
    pub stamps: ChunkStamps,
}

/// A fixed set of threads, one per planned range.
///
/// Each worker loads, aligns and scans its own chunk into a private table; nothing
/// is shared between workers while they run.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(WordCountError::InvalidConfiguration(
                "worker count must be at least 1".to_string(),
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("wordfreq-worker-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    /// Run one worker per range and wait for all of them.
    ///
    /// Results come back in range order. If any worker fails the whole call fails
    /// and no table is returned; every worker has still been joined by then.
    pub fn run_all<S: ByteSource + ?Sized>(
        &self,
        ranges: &[Range],
        source: &S,
        read_ahead: ReadAhead,
    ) -> Result<Vec<ChunkResult>> {
        let last = ranges.len().saturating_sub(1);
        self.pool.install(|| {
            ranges
                .par_iter()
                .enumerate()
                .map(|(rank, &range)| {
                    count_chunk(rank, range, rank == 0, rank == last, source, read_ahead)
                })
                .collect()
        })
    }
}

fn count_chunk<S: ByteSource + ?Sized>(
    rank: usize,
    range: Range,
    is_first: bool,
    is_last: bool,
    source: &S,
    read_ahead: ReadAhead,
) -> Result<ChunkResult> {
    let started = Instant::now();

    let mut buffer = ChunkBuffer::load(source, range, is_last, read_ahead)?;
    let aligned = align(range, rank, is_first, is_last, source, &mut buffer, read_ahead)?;
    let aligned_at = Instant::now();

    let (begin, end) = buffer.window(&aligned);
    let table = scan(buffer.as_bytes(), begin, end);

    debug!(
        rank,
        planned_start = range.start,
        planned_end = range.end,
        start = aligned.start,
        end = aligned.end,
        bytes = aligned.len(),
        truncated = aligned.truncated,
        distinct = table.len(),
        "chunk counted"
    );

    Ok(ChunkResult {
        aligned,
        table,
        stamps: ChunkStamps {
            started,
            aligned: aligned_at,
            finished: Instant::now(),
        },
    })
}

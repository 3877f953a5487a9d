use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::aligner::{AlignedRange, ReadAhead};
use crate::config::{CounterConfig, SortOrder};
use crate::error::{Result, WordCountError};
use crate::merger::{MergedTable, merge_by_word};
use crate::planner::plan;
use crate::pool::WorkerPool;
use crate::report;
use crate::source::{ByteSource, FileSource};
use crate::timing::RunTimings;

/// Result of counting a source once.
#[derive(Debug, Clone)]
pub struct CountOutcome {
    pub merged: MergedTable,
    pub chunks: Vec<AlignedRange>,
    pub timings: RunTimings,
}

/// Plan, scan in parallel and merge the words of `source`.
///
/// Fails fast: if any worker cannot read its chunk, no partial table is merged.
pub fn count_source<S: ByteSource + ?Sized>(
    source: &S,
    workers: usize,
    read_ahead: ReadAhead,
) -> Result<CountOutcome> {
    read_ahead.validate()?;
    let ranges = plan(source.len(), workers)?;
    let pool = WorkerPool::new(workers)?;

    let launched = Instant::now();
    let results = pool.run_all(&ranges, source, read_ahead)?;
    let joined = Instant::now();

    let stamps: Vec<_> = results.iter().map(|r| r.stamps).collect();
    let chunks: Vec<_> = results.iter().map(|r| r.aligned).collect();
    let merged = merge_by_word(results.into_iter().map(|r| r.table));
    let timings = RunTimings::from_stamps(launched, stamps, joined, Instant::now());

    Ok(CountOutcome {
        merged,
        chunks,
        timings,
    })
}

/// Counts the words of one file and writes them out as a report.
///
/// The merged table of the last successful count is kept, so a failed report write
/// can be retried with `write_report` without scanning the file again.
#[derive(Debug)]
pub struct WordCounter {
    source: FileSource,
    output_path: PathBuf,
    workers: usize,
    order: SortOrder,
    read_ahead: ReadAhead,
    merged: Option<MergedTable>,
    timings: Option<RunTimings>,
}

impl WordCounter {
    /// Validate the configuration. Nothing is read beyond file metadata yet.
    pub fn new(config: CounterConfig) -> Result<Self> {
        if config.workers == 0 {
            return Err(WordCountError::InvalidConfiguration(
                "worker count must be at least 1".to_string(),
            ));
        }
        config.read_ahead.validate()?;
        let source = FileSource::open(&config.source_path)?;

        Ok(Self {
            source,
            output_path: config.output_path,
            workers: config.workers,
            order: config.order,
            read_ahead: config.read_ahead,
            merged: None,
            timings: None,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Point later reports at `output_path`, returning the previous destination.
    pub fn set_output_path(&mut self, output_path: impl Into<PathBuf>) -> PathBuf {
        std::mem::replace(&mut self.output_path, output_path.into())
    }

    /// Count the source from scratch, replacing any earlier table.
    pub fn count(&mut self) -> Result<&MergedTable> {
        self.merged = None;
        self.timings = None;

        info!(
            source = %self.source.path().display(),
            bytes = self.source.len(),
            workers = self.workers,
            "counting words"
        );
        let outcome = count_source(&self.source, self.workers, self.read_ahead)?;
        info!(
            distinct = outcome.merged.len(),
            total = outcome.merged.total(),
            empty_chunks = outcome.chunks.iter().filter(|c| c.is_empty()).count(),
            truncated_chunks = outcome.chunks.iter().filter(|c| c.truncated).count(),
            elapsed_us = outcome.timings.total.as_micros() as u64,
            "count finished"
        );

        self.timings = Some(outcome.timings);
        let merged: &MergedTable = self.merged.insert(outcome.merged);
        Ok(merged)
    }

    /// Count, then write the report in the configured order.
    pub fn run(&mut self) -> Result<()> {
        self.count()?;
        self.write_report(self.order)
    }

    /// Write the last merged table to the output path in `order`.
    pub fn write_report(&mut self, order: SortOrder) -> Result<()> {
        let merged = self.merged.as_ref().ok_or_else(|| {
            WordCountError::InvalidConfiguration(
                "nothing to report: the source has not been counted yet".to_string(),
            )
        })?;

        let started = Instant::now();
        report::write_report(&self.output_path, order, merged)?;
        let elapsed = started.elapsed();

        info!(output = %self.output_path.display(), ?order, "report written");
        if let Some(timings) = self.timings.as_mut() {
            timings.record_write(elapsed);
        }
        Ok(())
    }

    pub fn merged(&self) -> Option<&MergedTable> {
        self.merged.as_ref()
    }

    /// Timings of the last run, once a count has completed.
    pub fn timings(&self) -> Option<&RunTimings> {
        self.timings.as_ref()
    }
}

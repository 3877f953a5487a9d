use std::fs;
use std::path::{Path, PathBuf};

use crate::aligner::ReadAhead;
use crate::error::{Result, WordCountError};

/// Which report layout a run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// One line per word, lexicographic by word.
    #[default]
    ByName,
    /// One line per word, ascending by count.
    ByCount,
}

/// Host hardware parallelism, never less than one.
pub fn default_workers() -> usize {
    num_cpus::get().max(1)
}

/// Everything a `WordCounter` needs for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub workers: usize,
    pub order: SortOrder,
    pub read_ahead: ReadAhead,
}

impl CounterConfig {
    pub fn new(source_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: output_path.into(),
            workers: default_workers(),
            order: SortOrder::default(),
            read_ahead: ReadAhead::default(),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_read_ahead(mut self, read_ahead: ReadAhead) -> Self {
        self.read_ahead = read_ahead;
        self
    }
}

/// A plain-text job description producing both reports for one source.
///
/// ```text
/// <source path>
/// <name-ordered report path>
/// <count-ordered report path>
/// <worker count>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFile {
    pub source_path: PathBuf,
    pub by_name_output: PathBuf,
    pub by_count_output: PathBuf,
    pub workers: usize,
}

impl JobFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            WordCountError::InvalidConfiguration(format!(
                "cannot read job file '{}': {e}",
                path.display()
            ))
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim);
        let mut field = |name: &str| match lines.next() {
            Some(line) if !line.is_empty() => Ok(line),
            _ => Err(WordCountError::InvalidConfiguration(format!(
                "job file is missing the {name}"
            ))),
        };

        let source_path = PathBuf::from(field("source path")?);
        let by_name_output = PathBuf::from(field("name-ordered output path")?);
        let by_count_output = PathBuf::from(field("count-ordered output path")?);
        let workers_text = field("worker count")?;

        let workers = match workers_text.parse::<usize>() {
            Ok(0) | Err(_) => {
                return Err(WordCountError::InvalidConfiguration(format!(
                    "worker count must be a positive integer, got '{workers_text}'"
                )));
            }
            Ok(n) => n,
        };

        Ok(Self {
            source_path,
            by_name_output,
            by_count_output,
            workers,
        })
    }

    /// One run per report: name-ordered first, then count-ordered.
    pub fn configs(&self) -> [CounterConfig; 2] {
        let base = |output: &Path, order| {
            CounterConfig::new(&self.source_path, output)
                .with_workers(self.workers)
                .with_order(order)
        };
        [
            base(&self.by_name_output, SortOrder::ByName),
            base(&self.by_count_output, SortOrder::ByCount),
        ]
    }
}

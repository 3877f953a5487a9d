use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock breakdown of the last run.
///
/// `align` spans from launch until the slowest worker finished reading and aligning
/// its chunk, `scan` from then until every worker joined. `write` stays zero until a
/// report is written, and `total` covers everything including the write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTimings {
    pub align: Duration,
    pub scan: Duration,
    pub merge: Duration,
    pub write: Duration,
    pub total: Duration,
}

/// Instants a worker records about its own chunk.
#[derive(Debug, Clone, Copy)]
pub struct ChunkStamps {
    pub started: Instant,
    pub aligned: Instant,
    pub finished: Instant,
}

impl RunTimings {
    pub(crate) fn from_stamps(
        launched: Instant,
        stamps: impl IntoIterator<Item = ChunkStamps>,
        joined: Instant,
        merged: Instant,
    ) -> Self {
        let aligned = stamps
            .into_iter()
            .map(|s| s.aligned)
            .max()
            .unwrap_or(launched);

        RunTimings {
            align: aligned.saturating_duration_since(launched),
            scan: joined.saturating_duration_since(aligned),
            merge: merged.saturating_duration_since(joined),
            write: Duration::ZERO,
            total: merged.saturating_duration_since(launched),
        }
    }

    pub(crate) fn record_write(&mut self, elapsed: Duration) {
        self.write = elapsed;
        self.total = self.align + self.scan + self.merge + elapsed;
    }
}

impl fmt::Display for RunTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total time: {} us", self.total.as_micros())?;
        writeln!(f, "Read time: {} us", self.align.as_micros())?;
        writeln!(f, "Count time: {} us", self.scan.as_micros())?;
        writeln!(f, "Merge time: {} us", self.merge.as_micros())?;
        write!(f, "Write time: {} us", self.write.as_micros())
    }
}

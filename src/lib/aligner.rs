//! Chunk loading and boundary alignment.
//!
//! A planned boundary `b` between chunk `k - 1` and chunk `k` may fall inside a
//! word. Both sides resolve it the same way: chunk `k - 1` extends its end over the
//! run of word bytes starting at `b`, and chunk `k` skips that same run. The word is
//! therefore counted by exactly one chunk. When a run covers a whole chunk, that
//! chunk's aligned start and end meet and it scans nothing.
//!
//! Extending an end requires bytes past the planned range, so every chunk but the
//! last is loaded with a read-ahead margin.

use tracing::{trace, warn};

use crate::error::{Result, WordCountError};
use crate::planner::Range;
use crate::source::ByteSource;
use crate::tokenizer::is_word_byte;

/// Length of "pneumonoultramicroscopicsilicovolcanoconiosis".
pub const LONGEST_WORD: usize = 45;

/// How far past its planned end a chunk may read while aligning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadAhead {
    /// Read at most this many extra bytes. A word that straddles a boundary and
    /// runs past the margin is split, so it may be under- or mis-counted.
    Fixed(usize),
    /// Start with `initial` extra bytes and keep doubling the margin until the
    /// boundary scan finds a non-word byte or end of input.
    Growable { initial: usize },
}

impl Default for ReadAhead {
    fn default() -> Self {
        ReadAhead::Growable {
            initial: LONGEST_WORD,
        }
    }
}

impl ReadAhead {
    pub fn initial_margin(&self) -> usize {
        match *self {
            ReadAhead::Fixed(margin) => margin,
            ReadAhead::Growable { initial } => initial,
        }
    }

    /// A fixed margin must reach at least one byte past the planned end: a word
    /// starting exactly on a boundary belongs to the chunk before it.
    pub fn validate(&self) -> Result<()> {
        match *self {
            ReadAhead::Fixed(0) => Err(WordCountError::InvalidConfiguration(
                "fixed read-ahead margin must be at least 1 byte".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// A planned range whose edges were moved off word interiors.
///
/// `start` and `end` are absolute source offsets; `planned` keeps the range the
/// planner produced. `truncated` is set when a fixed read-ahead margin cut a word
/// at either edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedRange {
    pub planned: Range,
    pub start: u64,
    pub end: u64,
    pub truncated: bool,
}

impl AlignedRange {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Bytes loaded by one worker, beginning at source offset `offset`.
#[derive(Debug, Clone)]
pub struct ChunkBuffer {
    offset: u64,
    bytes: Vec<u8>,
}

impl ChunkBuffer {
    /// Read `range` plus the initial read-ahead margin, clamped to the source end.
    /// The last chunk reads exactly to the end.
    pub fn load<S: ByteSource + ?Sized>(
        source: &S,
        range: Range,
        is_last: bool,
        read_ahead: ReadAhead,
    ) -> Result<Self> {
        read_ahead.validate()?;
        let margin = if is_last {
            0
        } else {
            read_ahead.initial_margin() as u64
        };
        let end = range.end.saturating_add(margin).min(source.len());
        let mut buffer = Self {
            offset: range.start,
            bytes: Vec::new(),
        };
        buffer.fill(source, end.saturating_sub(range.start))?;
        Ok(buffer)
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Source offset one past the last loaded byte.
    pub fn end_offset(&self) -> u64 {
        self.offset + self.bytes.len() as u64
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Buffer indices `(begin, end)` that correspond to `aligned`.
    pub fn window(&self, aligned: &AlignedRange) -> (usize, usize) {
        let begin = aligned.start.saturating_sub(self.offset) as usize;
        let end = aligned.end.saturating_sub(self.offset) as usize;
        (begin.min(self.bytes.len()), end.min(self.bytes.len()))
    }

    fn byte_at(&self, offset: u64) -> u8 {
        self.bytes[(offset - self.offset) as usize]
    }

    /// Append up to `additional` bytes. Returns `false` when already at the source end.
    fn grow<S: ByteSource + ?Sized>(&mut self, source: &S, additional: u64) -> Result<bool> {
        let available = source.len().saturating_sub(self.end_offset());
        if available == 0 {
            return Ok(false);
        }
        self.fill(source, additional.min(available))?;
        Ok(true)
    }

    fn fill<S: ByteSource + ?Sized>(&mut self, source: &S, count: u64) -> Result<()> {
        let at = self.end_offset();
        let len = usize::try_from(count).map_err(|_| WordCountError::ReadFailure {
            offset: at,
            len: usize::MAX,
            source: std::io::Error::other("chunk does not fit in memory"),
        })?;
        let old_len = self.bytes.len();
        self.bytes.resize(old_len + len, 0);
        source
            .read_exact_at(at, &mut self.bytes[old_len..])
            .map_err(|source| WordCountError::ReadFailure {
                offset: at,
                len,
                source,
            })
    }

    /// Whether the source byte at `offset`, just past what is loaded, is a word byte.
    fn continues_word<S: ByteSource + ?Sized>(&self, source: &S, offset: u64) -> Result<bool> {
        if offset >= source.len() {
            return Ok(false);
        }
        let mut next = [0u8; 1];
        source
            .read_exact_at(offset, &mut next)
            .map_err(|source| WordCountError::ReadFailure {
                offset,
                len: 1,
                source,
            })?;
        Ok(is_word_byte(next[0]))
    }

    /// Offset of the first non-word byte at or after `from`, and whether the scan
    /// had to stop inside a word.
    ///
    /// Under `ReadAhead::Fixed` the scan stops at the end of what is loaded, even if
    /// the source continues.
    fn skip_word_run<S: ByteSource + ?Sized>(
        &mut self,
        source: &S,
        from: u64,
        read_ahead: ReadAhead,
    ) -> Result<(u64, bool)> {
        let mut pos = from;
        let mut margin = read_ahead.initial_margin().max(1) as u64;

        loop {
            while pos < self.end_offset() && is_word_byte(self.byte_at(pos)) {
                pos += 1;
            }
            if pos < self.end_offset() {
                return Ok((pos, false));
            }

            match read_ahead {
                ReadAhead::Fixed(limit) => {
                    let truncated = self.continues_word(source, pos)?;
                    if truncated {
                        warn!(
                            offset = pos,
                            margin = limit,
                            "word runs past the read-ahead margin; counting it split"
                        );
                    }
                    return Ok((pos, truncated));
                }
                ReadAhead::Growable { .. } => {
                    margin = margin.saturating_mul(2);
                    if !self.grow(source, margin)? {
                        return Ok((pos, false));
                    }
                    trace!(offset = pos, loaded = self.bytes.len(), "grew chunk buffer");
                }
            }
        }
    }
}

/// Move the edges of `range` so neither falls inside a word.
///
/// The first range keeps its start and the last range keeps its end; the source
/// edges are word boundaries already. May read more of `source` into `buffer`
/// when the policy allows growth.
pub fn align<S: ByteSource + ?Sized>(
    range: Range,
    rank: usize,
    is_first: bool,
    is_last: bool,
    source: &S,
    buffer: &mut ChunkBuffer,
    read_ahead: ReadAhead,
) -> Result<AlignedRange> {
    debug_assert_eq!(buffer.offset(), range.start);

    let (end, end_cut) = if is_last {
        (range.end, false)
    } else {
        buffer.skip_word_run(source, range.end, read_ahead)?
    };
    let (start, start_cut) = if is_first {
        (range.start, false)
    } else {
        buffer.skip_word_run(source, range.start, read_ahead)?
    };

    let aligned = AlignedRange {
        planned: range,
        start: start.min(end),
        end,
        truncated: end_cut || start_cut,
    };
    trace!(rank, ?range, start = aligned.start, end = aligned.end, "aligned chunk");
    Ok(aligned)
}

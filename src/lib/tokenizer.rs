use std::collections::HashMap;
use std::collections::hash_map;

/// Word characters are ASCII letters, ASCII digits and the apostrophe.
///
/// Bytes with the high bit set are never part of a word, so tokens are always
/// ASCII and therefore valid UTF-8.
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'\''
}

/// Occurrence counts for the words of one chunk.
///
/// Owned by a single worker while it scans and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    counts: HashMap<String, u64>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens seen, counting repeats.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

impl IntoIterator for WordTable {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a> FromIterator<&'a str> for WordTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut table = WordTable::new();
        for word in words {
            table.record(word);
        }
        table
    }
}

/// Iterator over the tokens of a byte slice, left to right.
///
/// Stops at the end of the slice or at the first NUL byte.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        let bytes = match bytes.iter().position(|&b| b == 0) {
            Some(nul) => &bytes[..nul],
            None => bytes,
        };
        Self { bytes, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.bytes;

        while self.pos < bytes.len() && !is_word_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && is_word_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        Some(&bytes[start..self.pos])
    }
}

/// Count the words of `buffer[begin..end]` into a fresh table.
///
/// `end` is clamped to the buffer length, and an empty or inverted window yields an
/// empty table. Scanning stops early at a NUL byte.
pub fn scan(buffer: &[u8], begin: usize, end: usize) -> WordTable {
    let end = end.min(buffer.len());
    let mut table = WordTable::new();
    if begin >= end {
        return table;
    }

    for token in Tokens::new(&buffer[begin..end]) {
        // word bytes are ASCII, so this never allocates
        table.record(&String::from_utf8_lossy(token));
    }
    table
}

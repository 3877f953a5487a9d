use std::collections::BTreeMap;

use crate::tokenizer::WordTable;

/// Total count per word across every chunk, iterated in byte-lexicographic word order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedTable {
    counts: BTreeMap<String, u64>,
}

impl MergedTable {
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

    /// Number of tokens in the source, counting repeats.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    fn absorb(&mut self, table: WordTable) {
        for (word, count) in table {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }
}

/// One row of the count-ordered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub count: u64,
    pub word: String,
}

/// Sum the per-chunk tables into one word-ordered table.
pub fn merge_by_word<I>(tables: I) -> MergedTable
where
    I: IntoIterator<Item = WordTable>,
{
    let mut merged = MergedTable::default();
    for table in tables {
        merged.absorb(table);
    }
    merged
}

/// Project a merged table into entries ordered by ascending count.
///
/// The sort is stable over the word-ordered table, so words sharing a count stay in
/// word order and the output is reproducible.
pub fn merge_by_count(merged: &MergedTable) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = merged
        .iter()
        .map(|(word, count)| RankedEntry {
            count,
            word: word.to_owned(),
        })
        .collect();
    ranked.sort_by_key(|entry| entry.count);
    ranked
}

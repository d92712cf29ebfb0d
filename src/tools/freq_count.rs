use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Occurrence counts for every symbol seen in the input. Symbols never seen have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<u8, u64>,
}

impl FrequencyTable {
    /// Count for `symbol`, or None if it never occurred.
    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted, saturating at u64::MAX.
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |total, &count| total.saturating_add(count))
    }

    /// Iterate over (symbol, count) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&sym, &count)| (sym, count))
    }

    /// All (symbol, count) pairs in ascending symbol order. The tree builder starts from this
    /// order so that identical input always builds the same tree.
    pub fn leaves(&self) -> Vec<(u8, u64)> {
        let mut leaves: Vec<(u8, u64)> = self.iter().collect();
        leaves.sort_unstable();
        leaves
    }
}

/// Build from counts the caller already has. Zero counts are dropped, repeated symbols add up and
/// saturate at u64::MAX.
impl FromIterator<(u8, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut counts = FxHashMap::default();
        for (sym, count) in iter.into_iter().filter(|&(_, count)| count > 0) {
            let entry = counts.entry(sym).or_insert(0_u64);
            *entry = entry.saturating_add(count);
        }
        Self { counts }
    }
}

/// Count each distinct symbol in the input.
pub fn build_frequency_table(symbols: &[u8]) -> FrequencyTable {
    freqs(symbols)
        .into_iter()
        .enumerate()
        .map(|(sym, count)| (sym as u8, count))
        .collect()
}

/// Returns a frequency count of the input data, indexed by symbol. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

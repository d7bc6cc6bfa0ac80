use crate::models::StationStats;
use crate::utils::constants::STATION_TABLE_SIZE;

/// Per-chunk partial result: a fixed-size open-addressing table from
/// station-name spans to running statistics.
///
/// Names borrow from the mapped input region, so a chunk pass allocates the
/// bucket array once and nothing else. Bucket seeds come from a cumulative
/// XOR-then-multiply hash; an occupied bucket verifies the stored name and
/// linear-probes on mismatch, so distinct names never alias. The table never
/// resizes: the distinct-station cardinality must stay well below
/// `STATION_TABLE_SIZE`.
pub struct StationTable<'a> {
    entries: Vec<Entry<'a>>,
}

#[derive(Clone, Copy)]
struct Entry<'a> {
    name: &'a [u8],
    stats: StationStats,
}

impl Default for Entry<'_> {
    fn default() -> Self {
        Self {
            name: &[],
            stats: StationStats::default(),
        }
    }
}

impl<'a> StationTable<'a> {
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::default(); STATION_TABLE_SIZE],
        }
    }

    fn bucket_of(name: &[u8]) -> usize {
        let mut hash: u64 = 1;
        for &byte in name {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(31);
        }
        (hash % STATION_TABLE_SIZE as u64) as usize
    }

    /// Fold one observation into the bucket for `name`.
    pub fn record(&mut self, name: &'a [u8], tenths: i32) {
        let mut index = Self::bucket_of(name);
        loop {
            let entry = &mut self.entries[index];
            if entry.stats.is_empty() {
                entry.name = name;
                entry.stats = StationStats::from_observation(tenths);
                return;
            }
            if entry.name == name {
                entry.stats.record(tenths);
                return;
            }
            index = (index + 1) % STATION_TABLE_SIZE;
        }
    }

    /// Drain the occupied buckets, in table order.
    pub fn into_occupied(self) -> impl Iterator<Item = (&'a [u8], StationStats)> {
        self.entries
            .into_iter()
            .filter(|entry| !entry.stats.is_empty())
            .map(|entry| (entry.name, entry.stats))
    }
}

impl Default for StationTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}

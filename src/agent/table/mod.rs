use std::{collections::HashMap, fs::File, io::BufReader, io::BufWriter, path::Path, sync::Arc};

use dashmap::DashMap;

use crate::prelude::*;

mod entry;
mod fingerprint;

pub use entry::{TTBound, TTEntry};
pub use fingerprint::Fingerprint;

#[derive(Clone, Debug, Default)]
/// A concurrent transposition table.
///
/// One single-threaded search owns one table in the baseline design, but the
/// map is sharded so that a harness running many games may share one instance;
/// stores are last-write-wins per entry.
pub struct TranspositionTable
{
    map: Arc<DashMap<Fingerprint, TTEntry>>,
}

impl TranspositionTable
{
    /// Creates an empty table.
    pub fn new() -> TranspositionTable
    {
        TranspositionTable {
            map: Arc::new(DashMap::new()),
        }
    }

    /// Checks whether a cached entry settles this node outright.
    ///
    /// A hit always surfaces its move through `candidate` for ordering. An
    /// entry searched at least as deep as `depth` then applies the standard
    /// memoization bounds: an Exact value is returned as-is, a Lower bound
    /// raises alpha, an Upper bound lowers beta, and a window emptied by
    /// either tightening returns the stored value.
    pub fn check(&self, key: &Fingerprint, depth: u8, candidate: &mut Option<Action>, a: &mut i32, b: &mut i32) -> Option<i32>
    {
        if let Some(hit) = self.lookup(key)
        {
            *candidate = hit.mv;

            if hit.depth >= depth
            {
                match hit.bound
                {
                    | TTBound::Exact =>
                    {
                        return Some(hit.value);
                    }
                    | TTBound::Lower =>
                    {
                        *a = (*a).max(hit.value);
                    }
                    | TTBound::Upper =>
                    {
                        *b = (*b).min(hit.value);
                    }
                };

                if *a >= *b
                {
                    return Some(hit.value);
                }
            }
        }
        None
    }

    /// Drops every entry.
    pub fn clear(&self)
    {
        self.map.clear();
    }

    pub fn is_empty(&self) -> bool
    {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize
    {
        self.map.len()
    }

    /// Finds the entry associated with this position, if one exists.
    pub fn lookup(&self, key: &Fingerprint) -> Option<TTEntry>
    {
        self.map.get(key).map(|entry| *entry)
    }

    /// Stores an evaluation, replacing whatever was there.
    pub fn store(&self, key: Fingerprint, entry: TTEntry)
    {
        self.map.insert(key, entry);
    }
}

/// Offline persistence, for seeding a table between sessions.
impl TranspositionTable
{
    /// Reads a table back from its JSON form.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<TranspositionTable>
    {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let snapshot: HashMap<String, TTEntry> = serde_json::from_reader(reader)?;

        let table = TranspositionTable::new();
        for (key, entry) in snapshot
        {
            table.store(Fingerprint::from(key), entry);
        }

        log::debug!("loaded {} transpositions from {}", table.len(), path.as_ref().display());
        Ok(table)
    }

    /// Writes the whole table as JSON with string-encoded keys.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()>
    {
        let snapshot: HashMap<String, TTEntry> = self.map.iter().map(|r| (r.key().as_str().to_owned(), *r.value())).collect();

        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer(writer, &snapshot)?;

        log::debug!("saved {} transpositions to {}", snapshot.len(), path.as_ref().display());
        Ok(())
    }
}

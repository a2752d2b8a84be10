use super::parse::{parse_song_line, ParseRowError};
use super::SongRecord;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A non-fatal issue found while loading a CSV file. Offending rows are
/// skipped, the rest of the file still loads.
#[derive(Debug)]
pub enum Problem {
    MalformedRow { line: usize, error: ParseRowError },
}

#[derive(Debug, Default)]
pub struct LoadReport {
    /// Rows parsed and inserted, counting duplicate-id overwrites.
    pub inserted: usize,
    pub problems: Vec<Problem>,
}

/// In-memory song store keyed by song id.
#[derive(Debug, Default)]
pub struct Catalog {
    songs: HashMap<String, SongRecord>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Loads songs from a CSV file into the catalog.
    ///
    /// The first line is dropped unconditionally as the header. Every
    /// following line is parsed and inserted keyed by its id, a duplicate
    /// id overwrites the earlier entry. Malformed rows are collected in
    /// the report and skipped. An unreadable file is the only error,
    /// returned before any row is inserted.
    ///
    /// Repeated calls merge cumulatively into the same catalog.
    pub fn load_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Could not open song file {}", path.display()))?;
        let mut lines = BufReader::new(file).lines();

        let mut report = LoadReport::default();
        let header = lines
            .next()
            .transpose()
            .with_context(|| format!("Error reading {}", path.display()))?;
        if header.is_none() {
            // Empty file, not even a header.
            return Ok(report);
        }

        for (index, line) in lines.enumerate() {
            let line = line.with_context(|| format!("Error reading {}", path.display()))?;
            match parse_song_line(&line) {
                Ok(song) => {
                    self.insert(song);
                    report.inserted += 1;
                }
                Err(error) => report.problems.push(Problem::MalformedRow {
                    // 1-based, accounting for the skipped header.
                    line: index + 2,
                    error,
                }),
            }
        }
        Ok(report)
    }

    /// Inserts a song keyed by its id, returning the entry it replaced.
    pub fn insert(&mut self, song: SongRecord) -> Option<SongRecord> {
        self.songs.insert(song.id.clone(), song)
    }

    /// Looks up a song by exact id. A missing id is a normal result,
    /// not an error.
    pub fn get_song(&self, id: &str) -> Option<&SongRecord> {
        self.songs.get(id)
    }

    /// Iterates over all stored songs in unspecified order. Each call
    /// starts a fresh traversal.
    pub fn iter_songs(&self) -> impl Iterator<Item = &SongRecord> {
        self.songs.values()
    }

    pub fn get_songs_count(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

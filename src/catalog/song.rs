use serde::{Deserialize, Serialize};
use std::fmt;

/// One song's metadata and audio features, in the column order of the
/// source CSV.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SongRecord {
    pub valence: f64,
    pub year: i32,
    pub acousticness: f64,
    pub artists: Vec<String>,
    pub danceability: f64,
    pub duration_ms: i32,
    pub energy: f64,
    pub explicit: i32,
    pub id: String,
    pub instrumentalness: f64,
    pub key: i32,
    pub liveness: f64,
    pub loudness: f64,
    pub mode: i32,
    pub name: String,
    pub popularity: i32,
    /// Kept as raw text, the dataset mixes date formats.
    pub release_date: String,
    pub speechiness: f64,
    pub tempo: f64,
}

impl fmt::Display for SongRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.id)?;
        writeln!(f, "  artists: {}", self.artists.join("; "))?;
        writeln!(
            f,
            "  year: {}  release_date: {}  duration_ms: {}  explicit: {}  popularity: {}",
            self.year, self.release_date, self.duration_ms, self.explicit, self.popularity
        )?;
        writeln!(
            f,
            "  key: {}  mode: {}  loudness: {}  tempo: {}",
            self.key, self.mode, self.loudness, self.tempo
        )?;
        write!(
            f,
            "  valence: {}  acousticness: {}  danceability: {}  energy: {}  instrumentalness: {}  liveness: {}  speechiness: {}",
            self.valence,
            self.acousticness,
            self.danceability,
            self.energy,
            self.instrumentalness,
            self.liveness,
            self.speechiness
        )
    }
}

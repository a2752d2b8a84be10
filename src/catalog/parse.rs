use super::SongRecord;
use thiserror::Error;

/// Column count of the song CSV. The order is a hard contract with the
/// input file, there is no header-driven mapping.
pub const FIELDS_PER_ROW: usize = 19;

const COLUMNS: [&str; FIELDS_PER_ROW] = [
    "valence",
    "year",
    "acousticness",
    "artists",
    "danceability",
    "duration_ms",
    "energy",
    "explicit",
    "id",
    "instrumentalness",
    "key",
    "liveness",
    "loudness",
    "mode",
    "name",
    "popularity",
    "release_date",
    "speechiness",
    "tempo",
];

#[derive(Debug, Error)]
pub enum ParseRowError {
    #[error("expected {FIELDS_PER_ROW} comma-separated fields, found {found}")]
    MissingFields { found: usize },

    #[error("invalid number {value:?} in column {column}")]
    InvalidNumber { column: &'static str, value: String },
}

fn parse_int(fields: &[&str], index: usize) -> Result<i32, ParseRowError> {
    fields[index]
        .parse()
        .map_err(|_| ParseRowError::InvalidNumber {
            column: COLUMNS[index],
            value: fields[index].to_owned(),
        })
}

fn parse_float(fields: &[&str], index: usize) -> Result<f64, ParseRowError> {
    fields[index]
        .parse()
        .map_err(|_| ParseRowError::InvalidNumber {
            column: COLUMNS[index],
            value: fields[index].to_owned(),
        })
}

/// The artists field arrives as a decorated list like `['A'; 'B']`.
/// Brackets and quotes are stripped, the rest splits on `;`.
fn parse_artists(raw: &str) -> Vec<String> {
    raw.replace(['[', ']', '\''], "")
        .split(';')
        .map(|artist| artist.trim().to_owned())
        .collect()
}

/// Converts one raw CSV line into a [`SongRecord`].
///
/// The split is a naive one on `,` with no quote awareness, matching the
/// source file contract. Rows with fewer than 19 fields or non-numeric
/// text in a numeric column fail as a whole, nothing is partially
/// populated. Fields beyond the 19th are ignored.
pub fn parse_song_line(line: &str) -> Result<SongRecord, ParseRowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELDS_PER_ROW {
        return Err(ParseRowError::MissingFields {
            found: fields.len(),
        });
    }

    Ok(SongRecord {
        valence: parse_float(&fields, 0)?,
        year: parse_int(&fields, 1)?,
        acousticness: parse_float(&fields, 2)?,
        artists: parse_artists(fields[3]),
        danceability: parse_float(&fields, 4)?,
        duration_ms: parse_int(&fields, 5)?,
        energy: parse_float(&fields, 6)?,
        explicit: parse_int(&fields, 7)?,
        id: fields[8].to_owned(),
        instrumentalness: parse_float(&fields, 9)?,
        key: parse_int(&fields, 10)?,
        liveness: parse_float(&fields, 11)?,
        loudness: parse_float(&fields, 12)?,
        mode: parse_int(&fields, 13)?,
        name: fields[14].to_owned(),
        popularity: parse_int(&fields, 15)?,
        release_date: fields[16].to_owned(),
        speechiness: parse_float(&fields, 17)?,
        tempo: parse_float(&fields, 18)?,
    })
}

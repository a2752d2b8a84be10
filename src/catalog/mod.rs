mod catalog;
mod load;
mod parse;
mod song;

pub use catalog::{Catalog, LoadReport, Problem as LoadCatalogProblem};
pub use load::load_catalog;
pub use parse::{parse_song_line, ParseRowError, FIELDS_PER_ROW};
pub use song::SongRecord;

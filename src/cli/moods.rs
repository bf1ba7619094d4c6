use tabled::Table;

use crate::{mood::MoodGenreTable, types::MoodTableRow, utils};

pub fn moods() {
    let rows: Vec<MoodTableRow> = MoodGenreTable::builtin()
        .iter()
        .map(|(mood, genres)| MoodTableRow {
            mood: mood.to_string(),
            genres: utils::join_genres(genres, genres.len()),
        })
        .collect();

    println!("{}", Table::new(rows));
}

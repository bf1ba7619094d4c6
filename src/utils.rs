/// The prompt asks for at least this many artists; fewer only triggers a warning.
pub const RECOMMENDED_MIN_ARTISTS: usize = 3;

pub fn split_artist_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_genres(genres: &[String], max: usize) -> String {
    genres.iter().take(max).cloned().collect::<Vec<_>>().join(", ")
}

use std::collections::{BTreeMap, HashMap};

use rand::{SeedableRng, rngs::StdRng};
use vibebox::{
    VibeError,
    pipeline::select_random_track,
    types::Track,
};

// Helper function to build a track list with ids derived from the artist
fn tracks(artist: &str, count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| Track::new(format!("{} song {}", artist, i), format!("{}-{}", artist, i)))
        .collect()
}

fn pool(entries: &[(&str, usize)]) -> BTreeMap<String, Vec<Track>> {
    entries
        .iter()
        .map(|(artist, count)| (artist.to_string(), tracks(artist, *count)))
        .collect()
}

#[test]
fn test_select_from_single_track() {
    let mut rng = StdRng::seed_from_u64(7);
    let selection = select_random_track(&pool(&[("Adele", 1)]), &mut rng).unwrap();

    assert_eq!(selection.artist_name, "Adele");
    assert_eq!(selection.track, Track::new("Adele song 0", "Adele-0"));
}

#[test]
fn test_select_never_picks_artist_without_tracks() {
    let tracks_by_artist = pool(&[("Drake", 0), ("Adele", 3), ("Beethoven", 0)]);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let selection = select_random_track(&tracks_by_artist, &mut rng).unwrap();
        assert_eq!(selection.artist_name, "Adele");
        assert!(tracks_by_artist["Adele"].contains(&selection.track));
    }
}

#[test]
fn test_selected_track_belongs_to_selected_artist() {
    let tracks_by_artist = pool(&[("Drake", 4), ("Adele", 2), ("Bjork", 6)]);
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..200 {
        let selection = select_random_track(&tracks_by_artist, &mut rng).unwrap();
        assert!(tracks_by_artist[&selection.artist_name].contains(&selection.track));
    }
}

#[test]
fn test_artists_are_equally_likely_regardless_of_track_count() {
    let tracks_by_artist = pool(&[("Few", 1), ("Many", 30)]);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut picks: HashMap<String, usize> = HashMap::new();

    let draws = 2000;
    for _ in 0..draws {
        let selection = select_random_track(&tracks_by_artist, &mut rng).unwrap();
        *picks.entry(selection.artist_name).or_default() += 1;
    }

    let few = picks.get("Few").copied().unwrap_or(0);
    assert!(few > draws * 35 / 100 && few < draws * 65 / 100, "Few picked {} times", few);
}

#[test]
fn test_every_track_can_be_picked() {
    let tracks_by_artist = pool(&[("Solo", 5)]);
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..500 {
        let selection = select_random_track(&tracks_by_artist, &mut rng).unwrap();
        seen.insert(selection.track.track_id);
    }

    assert_eq!(seen.len(), 5);
}

#[test]
fn test_empty_pool_is_an_error() {
    let mut rng = StdRng::seed_from_u64(3);

    let no_artists = select_random_track(&BTreeMap::new(), &mut rng);
    assert!(matches!(no_artists, Err(VibeError::EmptySelectionPool)));

    let only_empty = select_random_track(&pool(&[("Drake", 0), ("Adele", 0)]), &mut rng);
    assert!(matches!(only_empty, Err(VibeError::EmptySelectionPool)));
}

#[test]
fn test_empty_pool_message_is_user_facing() {
    let message = VibeError::EmptySelectionPool.to_string();
    assert!(message.contains("Try different artists or another mood"));
}

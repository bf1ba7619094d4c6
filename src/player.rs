//! Rendering of the chosen track: Spotify URLs, the embeddable player iframe
//! and a standalone HTML page around it.

use crate::types::SelectionResult;

const OPEN_SPOTIFY_URL: &str = "https://open.spotify.com";

pub fn embed_url(track_id: &str) -> String {
    format!("{}/embed/track/{}", OPEN_SPOTIFY_URL, track_id)
}

pub fn track_url(track_id: &str) -> String {
    format!("{}/track/{}", OPEN_SPOTIFY_URL, track_id)
}

/// The 300x80 Spotify embed for a track.
pub fn render_embed(track_id: &str) -> String {
    format!(
        r#"<iframe src="{src}" width="300" height="80" frameborder="0" allowtransparency="true" allow="encrypted-media"></iframe>"#,
        src = escape_html(&embed_url(track_id))
    )
}

/// Full page served by `vibebox play --serve`.
pub fn render_page(selection: &SelectionResult) -> String {
    let track = escape_html(&selection.track.name);
    let artist = escape_html(&selection.artist_name);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>vibebox - {track}</title>
</head>
<body>
<h1>vibebox</h1>
<p>{track} &middot; {artist}</p>
{embed}
</body>
</html>
"#,
        track = track,
        artist = artist,
        embed = render_embed(&selection.track.track_id),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

use std::{future::Future, net::SocketAddr, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    api::PlayerPage,
    config::Config,
    error, info,
    mood::{self, Mood, MoodGenreTable},
    pipeline::{self, Resolution, RunReport},
    player, server,
    spotify::SpotifyClient,
    success,
    types::SelectionResult,
    utils, warning,
};

/// How the chosen track is handed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Print the track, its link and the embed snippet
    #[default]
    Print,
    /// Also open the track in the default browser
    Open,
    /// Serve a local page with the embedded player and open it
    Serve,
}

pub async fn play(
    mood: Mood,
    artists: &str,
    album_limit: Option<u32>,
    show_report: bool,
    presentation: Presentation,
) {
    let names = utils::split_artist_names(artists);
    if names.is_empty() {
        error!("Please enter at least one artist (comma-separated).");
    }
    if names.len() < utils::RECOMMENDED_MIN_ARTISTS {
        warning!(
            "Only {} artist(s) given. At least {} make for better picks.",
            names.len(),
            utils::RECOMMENDED_MIN_ARTISTS
        );
    }

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };
    let album_limit = album_limit.unwrap_or(config.album_limit);
    let table = MoodGenreTable::builtin();

    let client = match with_spinner("Connecting to Spotify...", SpotifyClient::connect(&config)).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    info!("Searching...");
    let resolutions = with_spinner(
        format!("Looking up {} artists...", names.len()),
        pipeline::resolve_artists(&client, &names),
    )
    .await;
    let matched = mood::filter_artists(&Resolution::resolved_map(&resolutions), mood.label(), table);
    info!(
        "{} of {} artists fit a {} mood",
        matched.len(),
        names.len(),
        mood
    );

    info!("Generating tracks...");
    let expansion = with_spinner(
        "Fetching albums and tracks...",
        pipeline::expand_catalog(&client, &matched, album_limit),
    )
    .await;

    let report = RunReport::new(mood.label(), resolutions, matched, expansion);
    if show_report {
        print_report(&report, table);
    } else {
        for fault in &report.faults {
            warning!("{}", fault);
        }
    }

    info!("Playing soon...");
    let selection = match report.select(&mut rand::rng()) {
        Ok(selection) => selection,
        Err(e) => error!("{}", e),
    };

    present(&selection, presentation, config.server_addr).await;
}

fn print_report(report: &RunReport, table: &MoodGenreTable) {
    println!("{}", Table::new(report.rows(table)));
    for fault in &report.faults {
        warning!("{}", fault);
    }
    info!(
        "{} artist(s) with playable tracks",
        report.playable_artists()
    );
}

async fn present(selection: &SelectionResult, presentation: Presentation, addr: SocketAddr) {
    let track_url = player::track_url(&selection.track.track_id);

    success!(
        "Now playing: {} by {}",
        selection.track.name,
        selection.artist_name
    );
    println!("{}", track_url);

    match presentation {
        Presentation::Print => {
            println!("{}", player::render_embed(&selection.track.track_id));
        }
        Presentation::Open => open_in_browser(&track_url),
        Presentation::Serve => {
            let listener = match server::bind(addr).await {
                Ok(listener) => listener,
                Err(e) => error!("{}", e),
            };

            let page = PlayerPage {
                selection: selection.clone(),
                html: player::render_page(selection),
            };
            let page_url = format!("http://{}/", addr);
            info!("Player page at {}. Press Ctrl-C to stop.", page_url);
            open_in_browser(&page_url);

            if let Err(e) = server::serve_player(listener, page).await {
                error!("{}", e);
            }
        }
    }
}

fn open_in_browser(url: &str) {
    if webbrowser::open(url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }
}

async fn with_spinner<F, T>(message: impl Into<String>, future: F) -> T
where
    F: Future<Output = T>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = future.await;
    pb.finish_and_clear();
    result
}

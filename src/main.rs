use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use vibebox::{
    cli::{self, Presentation},
    config, error,
    mood::Mood,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Increase diagnostic output (-v debug, -vv trace)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play a track that fits your mood
    Play(PlayOptions),

    /// List the moods and the genres they stand for
    Moods,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// How you are feeling
    #[clap(long, short, value_enum, ignore_case = true)]
    pub mood: Mood,

    /// At least 3 preferred artists, comma-separated
    #[clap(long, short)]
    pub artists: String,

    /// Albums fetched per artist (1-50)
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub album_limit: Option<u32>,

    /// Show a table of every artist lookup and the faults of the run
    #[clap(long)]
    pub report: bool,

    /// Open the chosen track in the browser
    #[clap(long, conflicts_with = "serve")]
    pub open: bool,

    /// Serve a local page with the embedded player
    #[clap(long)]
    pub serve: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "vibebox=warn",
        1 => "vibebox=debug",
        _ => "vibebox=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    match cli.command {
        Command::Play(opt) => {
            let presentation = if opt.serve {
                Presentation::Serve
            } else if opt.open {
                Presentation::Open
            } else {
                Presentation::Print
            };

            cli::play(
                opt.mood,
                &opt.artists,
                opt.album_limit,
                opt.report,
                presentation,
            )
            .await
        }
        Command::Moods => cli::moods(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

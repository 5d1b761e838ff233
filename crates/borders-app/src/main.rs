//! Border quiz terminal front-end.
//!
//! A thin line-oriented shell over the [`Session`] use case.  Typing text
//! searches for countries; picking a suggestion by number submits it as a
//! guess.
//!
//! # Usage
//!
//! ```text
//! borders [OPTIONS]
//!
//! Options:
//!   --config  <PATH>   Config file [default: platform config dir]
//!   --locale  <TAG>    Display locale, overrides [general] locale
//!   --atlas   <PATH>   TopoJSON/GeoJSON atlas, overrides [map] atlas_path
//!   --svg-out <PATH>   Write the current map here after every change
//! ```
//!
//! # Commands
//!
//! | Input          | Effect                                   |
//! |----------------|------------------------------------------|
//! | `text`         | Search for countries matching `text`     |
//! | `1`..`8`       | Guess the numbered suggestion            |
//! | `=text`        | Guess the country named `text`           |
//! | `:new`         | Start a new round                        |
//! | `:menu`        | Abandon the round                        |
//! | `:outlines`    | Show outlines of missing neighbours      |
//! | `:names`       | Reveal one more letter of their names    |
//! | `+` / `-`      | Zoom in / out                            |
//! | `:lang <tag>`  | Switch display language                  |
//! | `:quit`        | Exit                                     |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use borders_app::application::session::{Session, SessionContext};
use borders_app::infrastructure::atlas_loader::{AtlasLoader, FileAtlasSource};
use borders_app::infrastructure::storage::config::{
    load_config, load_config_from, AppConfig, ConfigError,
};
use borders_app::infrastructure::telemetry::{emit_session_started, SessionStarted, TracingSink};
use borders_core::{Catalog, GameStatus, GuessOutcome, IgnoreReason, Lcg, Projector};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Name every country that borders the target before running out of guesses.
#[derive(Debug, Parser)]
#[command(name = "borders", about = "Border quiz in the terminal", version)]
struct Cli {
    /// Config file to read instead of the platform default.
    #[arg(long, env = "BORDERS_CONFIG")]
    config: Option<PathBuf>,

    /// Display locale (`en` or `de`).
    #[arg(long, env = "BORDERS_LOCALE")]
    locale: Option<String>,

    /// World atlas in TopoJSON or GeoJSON format.
    #[arg(long, env = "BORDERS_ATLAS")]
    atlas: Option<PathBuf>,

    /// File the rendered SVG map is written to.
    #[arg(long)]
    svg_out: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        let result = match &self.config {
            Some(path) => load_config_from(path),
            None => match load_config() {
                Err(ConfigError::NoPlatformConfigDir) => Ok(AppConfig::default()),
                other => other,
            },
        };
        result.context("failed to load configuration")
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Empty,
    Search(String),
    Pick(usize),
    Guess(String),
    Start,
    Menu,
    Outlines,
    Names,
    ZoomIn,
    ZoomOut,
    Locale(String),
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        match line {
            "+" => return Command::ZoomIn,
            "-" => return Command::ZoomOut,
            _ => {}
        }
        if let Some(rest) = line.strip_prefix(':') {
            let mut words = rest.split_whitespace();
            return match (words.next(), words.next()) {
                (Some("new"), _) => Command::Start,
                (Some("menu"), _) => Command::Menu,
                (Some("outlines"), _) => Command::Outlines,
                (Some("names"), _) => Command::Names,
                (Some("in"), _) => Command::ZoomIn,
                (Some("out"), _) => Command::ZoomOut,
                (Some("lang"), Some(tag)) => Command::Locale(tag.to_string()),
                (Some("quit" | "q"), _) => Command::Quit,
                _ => Command::Help,
            };
        }
        if let Some(text) = line.strip_prefix('=') {
            return Command::Guess(text.trim().to_string());
        }
        match line.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Pick(n),
            _ => Command::Search(line.to_string()),
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_help() {
    println!("type to search, 1-8 to guess a suggestion, =name to guess by name");
    println!(":new  :menu  :outlines  :names  + / -  :lang <en|de>  :quit");
}

fn print_round(session: &Session) {
    let Some(game) = session.game() else {
        println!("no round in progress; :new starts one");
        return;
    };
    let target = &game.current_country().name;
    println!(
        "{} has {} neighbours",
        session.display_name(target),
        game.current_country().borders.len()
    );
    let found: Vec<&str> = game
        .correct_guesses()
        .iter()
        .map(|g| {
            let canonical = session.catalog().canonical_name(g).unwrap_or(g);
            session.display_name(canonical)
        })
        .collect();
    if !found.is_empty() {
        println!("found: {}", found.join(", "));
    }
    for (_, masked) in session.masked_missing_borders() {
        println!("  {masked}");
    }
    match game.status() {
        GameStatus::InProgress => println!(
            "wrong guesses left: {} of {}",
            game.remaining_attempts(),
            game.max_wrong_attempts()
        ),
        GameStatus::Won => println!("you named them all!"),
        GameStatus::Lost => {
            let missing: Vec<&str> = game
                .missing_borders()
                .into_iter()
                .map(|b| session.display_name(b))
                .collect();
            println!("out of guesses; missing: {}", missing.join(", "));
        }
    }
}

fn print_outcome(session: &Session, name: &str, outcome: Option<GuessOutcome>) {
    let label = session
        .catalog()
        .canonical_name(name)
        .map_or(name, |canonical| session.display_name(canonical));
    match outcome {
        None => println!("no round in progress; :new starts one"),
        Some(GuessOutcome::Correct) => println!("✓ {label}"),
        Some(GuessOutcome::Wrong) => println!("✗ {label}"),
        Some(GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed)) => {
            println!("{label} was already guessed")
        }
        Some(GuessOutcome::Ignored(IgnoreReason::TargetCountry)) => {
            println!("{label} is the country itself")
        }
        Some(GuessOutcome::Ignored(IgnoreReason::GameOver)) => println!("the round is over"),
        Some(GuessOutcome::Ignored(IgnoreReason::Blank)) => {}
    }
}

fn print_suggestions(session: &Session, suggestions: &[String]) {
    if suggestions.is_empty() {
        println!("no matching country");
        return;
    }
    for (i, name) in suggestions.iter().enumerate() {
        println!("{:>2}. {}", i + 1, session.display_name(name));
    }
}

/// Writes the map if an atlas is loaded and something can be drawn.
async fn write_map(
    session: &Session,
    loader: Option<&AtlasLoader>,
    projector: &Projector,
    svg_out: Option<&PathBuf>,
) {
    let (Some(loader), Some(path)) = (loader, svg_out) else {
        return;
    };
    let Some(atlas) = loader.atlas() else {
        return;
    };
    let Some(scene) = session.map_scene(&atlas, projector) else {
        return;
    };
    if let Err(e) = tokio::fs::write(path, scene.to_svg()).await {
        warn!("could not write map to {}: {e}", path.display());
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // `RUST_LOG` wins over the configured level.  Logs go to stderr so they
    // do not interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let locale = cli
        .locale
        .clone()
        .unwrap_or_else(|| config.general.locale.clone());
    let catalog = Arc::new(Catalog::builtin().context("built-in country catalog is invalid")?);
    let mut session = Session::new(
        SessionContext::new(locale),
        catalog,
        config.game.rules(),
        Box::new(Lcg::from_clock()),
    )
    .context("failed to create session")?
    .with_home_zoom(config.map.zoom()?);

    emit_session_started(Arc::new(TracingSink), SessionStarted::from(session.context()));

    let projector = config.map.projector();
    let loader = cli
        .atlas
        .clone()
        .or_else(|| config.map.atlas_path.clone())
        .map(|path| AtlasLoader::spawn(Arc::new(FileAtlasSource::new(path))));
    if loader.is_some() && cli.svg_out.is_none() {
        info!("atlas configured but no --svg-out given; the map will not be written");
    }

    print_help();
    session.start_game();
    print_round(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut suggestions: Vec<String> = Vec::new();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read stdin")?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        match Command::parse(&line) {
            Command::Empty => continue,
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Search(query) => {
                suggestions = session.suggestions(&query);
                print_suggestions(&session, &suggestions);
                continue;
            }
            Command::Pick(n) => match suggestions.get(n - 1).cloned() {
                Some(name) => {
                    let outcome = session.make_guess(&name);
                    print_outcome(&session, &name, outcome);
                    suggestions.clear();
                    print_round(&session);
                }
                None => println!("no suggestion {n}"),
            },
            Command::Guess(name) => {
                let outcome = session.make_guess(&name);
                print_outcome(&session, &name, outcome);
                print_round(&session);
            }
            Command::Start => {
                session.start_game();
                suggestions.clear();
                print_round(&session);
            }
            Command::Menu => {
                session.reset_game();
                print_round(&session);
            }
            Command::Outlines => {
                if !session.show_outlines_hint() {
                    println!("outlines are already shown or the round is over");
                }
            }
            Command::Names => {
                if session.show_names_hint() {
                    print_round(&session);
                } else {
                    println!("no more letters to reveal");
                }
            }
            Command::ZoomIn => println!("zoom {}", session.zoom_in()),
            Command::ZoomOut => println!("zoom {}", session.zoom_out()),
            Command::Locale(tag) => match session.set_locale(&tag) {
                Ok(()) => {
                    suggestions.clear();
                    print_round(&session);
                }
                Err(e) => println!("{e}"),
            },
        }

        write_map(&session, loader.as_ref(), &projector, cli.svg_out.as_ref()).await;
    }

    if let Some(loader) = &loader {
        loader.cancel();
    }
    info!(session_id = %session.context().session_id, "session ended");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse_search_and_guess() {
        assert_eq!(Command::parse("  germ "), Command::Search("germ".to_string()));
        assert_eq!(Command::parse("=Côte d'Ivoire"), Command::Guess("Côte d'Ivoire".to_string()));
        assert_eq!(Command::parse(""), Command::Empty);
    }

    #[test]
    fn test_command_parse_numbers_pick_suggestions() {
        assert_eq!(Command::parse("3"), Command::Pick(3));
        assert_eq!(Command::parse("0"), Command::Search("0".to_string()));
    }

    #[test]
    fn test_command_parse_colon_commands() {
        assert_eq!(Command::parse(":new"), Command::Start);
        assert_eq!(Command::parse(":menu"), Command::Menu);
        assert_eq!(Command::parse(":outlines"), Command::Outlines);
        assert_eq!(Command::parse(":names"), Command::Names);
        assert_eq!(Command::parse(":lang de"), Command::Locale("de".to_string()));
        assert_eq!(Command::parse(":lang"), Command::Help);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":bogus"), Command::Help);
    }

    #[test]
    fn test_command_parse_zoom_shortcuts() {
        assert_eq!(Command::parse("+"), Command::ZoomIn);
        assert_eq!(Command::parse("-"), Command::ZoomOut);
        assert_eq!(Command::parse(":in"), Command::ZoomIn);
    }

    #[test]
    fn test_cli_defaults_are_empty() {
        let cli = Cli::parse_from(["borders"]);
        assert!(cli.svg_out.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "borders",
            "--locale",
            "de",
            "--atlas",
            "world.json",
            "--svg-out",
            "map.svg",
        ]);
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert_eq!(cli.atlas, Some(PathBuf::from("world.json")));
        assert_eq!(cli.svg_out, Some(PathBuf::from("map.svg")));
    }
}

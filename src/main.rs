use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use sandbox_hangman::{game::GameState, intent::parse_script};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod tui;

#[derive(Parser)]
#[command(name = "sandbox-hangman", version, about = "Hangman where you pick the word and the guesses")]
struct Cli {
    /// Where log output goes; the terminal belongs to the game
    #[arg(long, global = true, default_value = "sandbox-hangman.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play in the terminal (default)
    Play {
        /// Skip the setup screen with this many letters
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=15))]
        letters: Option<u8>,
    },
    /// Apply a script of intents, e.g. "init 3; arm a; select 0; confirm",
    /// and print the resulting board
    Replay { script: String },
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .wrap_err_with(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("installing log subscriber: {err}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    match cli.command.unwrap_or(Command::Play { letters: None }) {
        Command::Play { letters } => play(letters.map(usize::from)).await,
        Command::Replay { script } => replay(&script),
    }
}

async fn play(letters: Option<usize>) -> Result<()> {
    tui::initialize_panic_handler();
    let mut terminal = tui::init()?;
    let app_result = tui::App::init(letters).run(&mut terminal).await;
    tui::restore()?;
    Ok(app_result?)
}

fn replay(script: &str) -> Result<()> {
    let intents = parse_script(script).map_err(|err| eyre!("{err:#}"))?;
    let mut game = GameState::new();
    for intent in &intents {
        game.apply(intent);
    }
    info!(intents = intents.len(), phase = ?game.phase(), "replay finished");

    println!("{game}");
    let graveyard: String = game.graveyard().iter().collect();
    println!("graveyard: {graveyard}");
    println!("wrong: {}", game.wrong_count());
    println!("phase: {:?}", game.phase());
    Ok(())
}

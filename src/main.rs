//! Wordle Daily - CLI
//!
//! Daily word-guessing game with TUI and simple CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_daily::{
    commands::{PreparedGame, SecretChoice, prepare_game, run_share, run_simple, run_stats},
    config::Config,
    game::GameController,
    interactive::{App, run_tui},
    logging,
    storage::FileStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the daily word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: platform config dir/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved games, statistics and the log
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Answer list file, one word per line
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Accepted-guess list file, one word per line
    #[arg(short = 'w', long, global = true)]
    allowed: Option<PathBuf>,

    /// Play against this word instead of today's
    #[arg(long, global = true, conflicts_with = "random")]
    word: Option<String>,

    /// Practice game against a random word (not saved)
    #[arg(short, long, global = true)]
    random: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show statistics
    Stats,

    /// Print the share text for today's game
    Share,
}

impl Cli {
    /// Config file values with command-line overrides applied
    fn resolve_config(&self) -> Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::default_path);
        let mut config = Config::load(&path)?;

        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(answers) = &self.answers {
            config.answers = Some(answers.clone());
        }
        if let Some(allowed) = &self.allowed {
            config.allowed = Some(allowed.clone());
        }
        Ok(config)
    }

    fn secret_choice(&self) -> SecretChoice {
        match (&self.word, self.random) {
            (Some(word), _) => SecretChoice::Fixed(word.clone()),
            (None, true) => SecretChoice::Random,
            (None, false) => SecretChoice::Daily,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let data_dir = config.data_dir();
    logging::init(&data_dir);
    tracing::info!(data_dir = %data_dir.display(), "starting");

    let store = FileStore::new(&data_dir);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Stats => {
            run_stats(&store);
            Ok(())
        }
        Commands::Play => {
            let game = prepare_game(&config, &cli.secret_choice())?;
            run_play_command(game, store, &config.title)
        }
        Commands::Simple => {
            let game = prepare_game(&config, &cli.secret_choice())?;
            run_simple_command(game, store, &config.title)
        }
        Commands::Share => {
            println!("{}", run_share(&config, &cli.secret_choice(), store)?);
            Ok(())
        }
    }
}

fn controller_for(game: PreparedGame, store: FileStore) -> GameController<FileStore> {
    if game.practice {
        GameController::practice(game.dictionary, store)
    } else {
        GameController::new(game.dictionary, store)
    }
}

fn run_play_command(game: PreparedGame, store: FileStore, title: &str) -> Result<()> {
    let index = game.index;
    let practice = game.practice;
    let next_date = game.next_date;

    let app = App::new(controller_for(game, store), title, index)
        .with_practice(practice)
        .with_next_date(next_date);

    if let Some(text) = run_tui(app)? {
        println!("{text}");
    }
    Ok(())
}

fn run_simple_command(game: PreparedGame, store: FileStore, title: &str) -> Result<()> {
    let index = game.index;
    let mut controller = controller_for(game, store);
    run_simple(&mut controller, title, index)?;
    Ok(())
}

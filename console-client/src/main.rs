mod config;
mod game_loop;
mod input;
mod name_prompt;
mod render;

use std::io;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{FirstPlayerMode, MAX_AI_MOVE_DELAY_MS};
use tictactoe_common::id_generator::generate_player_name;
use tictactoe_common::{log, logger};

use config::{get_config_manager, get_default_config_path};
use game_loop::ConsoleGame;
use name_prompt::{normalize_player_name, prompt_player_name};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Ai,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Ai => FirstPlayerMode::Ai,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Player name for this run. Not saved.
    #[arg(long)]
    name: Option<String>,

    /// Who moves first; overrides the config file.
    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,

    /// Seed for the computer's tie-breaks, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(get_default_config_path);
    let config_manager = get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;
    log!("Config loaded from {}", config_path);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let cli_name = args.name.as_deref().and_then(normalize_player_name);
    let player_name = match (cli_name, config.player_name.clone()) {
        (Some(name), _) => name,
        (None, Some(name)) => name,
        (None, None) => {
            let name = prompt_player_name(&mut stdin.lock(), &mut stdout, &generate_player_name())?;
            config.player_name = Some(name.clone());
            if let Err(e) = config_manager.set_config(&config) {
                log!("Failed to save player name: {}", e);
            }
            name
        }
    };

    let mut settings = config.game;
    if let Some(first) = args.first {
        settings.first_player = first.into();
    }
    if let Some(delay_ms) = args.delay_ms {
        settings.ai_move_delay_ms = delay_ms.min(MAX_AI_MOVE_DELAY_MS);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let mut game = ConsoleGame::new(stdin.lock(), &mut stdout, settings, player_name, rng);
    let scoreboard = game.run()?;

    println!(
        "Played {} game(s): {} won, {} lost, {} tied.",
        scoreboard.games_played(),
        scoreboard.wins,
        scoreboard.losses,
        scoreboard.ties
    );

    Ok(())
}

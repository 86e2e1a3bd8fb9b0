mod api;
mod cleanup_task;
mod game_session_manager;
mod server_config;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::{log, logger};

use cleanup_task::CleanupTask;
use game_session_manager::GameSessionManager;
use server_config::{get_config_manager, DEFAULT_CONFIG_FILE_NAME};
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: String,

    /// Overrides `bind_address` from the config file.
    #[arg(long)]
    bind: Option<String>,

    /// Overrides `static_files_path` from the config file.
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_files_path = Some(static_dir);
    }
    let addr = config.socket_addr()?;

    log!(
        "Config loaded from {} (first player: {:?}, AI delay: {} ms)",
        args.config,
        config.game.first_player,
        config.game.ai_move_delay_ms
    );

    let session_manager = GameSessionManager::new(config.game);

    let cleanup_task = CleanupTask::new(
        session_manager.clone(),
        config.cleanup_interval(),
        config.inactivity_timeout(),
    );
    tokio::spawn(async move {
        cleanup_task.run().await;
    });

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    run_web_server(
        session_manager,
        addr,
        config.static_files_path.map(PathBuf::from),
        shutdown_signal,
    )
    .await?;

    log!("Server shut down gracefully");

    Ok(())
}

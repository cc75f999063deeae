mod config;
mod game_loop;
mod input;
mod render;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::FirstPlayer;
use common::{log, logger};

use config::get_config_manager;
use game_loop::GameLoop;
use render::Glyphs;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against an unbeatable bot")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the bot's opening move
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    bot_first: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = get_config_manager(args.config).get_or_create_config()?;

    let first_player = if args.bot_first {
        FirstPlayer::Bot
    } else {
        config.first_player
    };
    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let glyphs = Glyphs::new(&config.human_glyph, &config.bot_glyph)?;

    log!("Session seed {}", rng.seed());

    let summary = GameLoop::new(
        io::stdin().lock(),
        io::stdout().lock(),
        first_player,
        glyphs,
        &mut rng,
    )
    .run()?;

    log!(
        "Session finished after {} games ({} won, {} lost, {} drawn)",
        summary.games(),
        summary.human_wins,
        summary.bot_wins,
        summary.draws
    );

    Ok(())
}

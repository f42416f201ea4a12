mod config;
mod input;
mod render;

use std::process::ExitCode;

use clap::Parser;
use common::games::SessionRng;
use common::games::puzzle2048::Puzzle2048GameState;
use common::id_generator::generate_session_id;
use common::{log, logger};

use config::RenderConfig;
use input::Command;

#[derive(Parser)]
#[command(name = "twenty48", about = "Slide and merge tiles on a 4x4 grid")]
struct Args {
    /// YAML config file; defaults apply when it does not exist
    #[arg(long, default_value = "twenty48.yaml")]
    config: String,

    /// Fixed seed for tile placement
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective config to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let config_manager = config::get_config_manager(&args.config);
    let config = config_manager.get_config()?;

    let prefix = args.use_log_prefix.then(|| "Game".to_string());
    logger::init_logger(prefix, config.log.file.as_deref())?;

    if args.write_config {
        config_manager.set_config(&config)?;
        log!("Config written to {}", args.config);
        return Ok(());
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut game = Puzzle2048GameState::new(generate_session_id(), config.game, rng);

    draw(&game, &config.render);

    while !game.is_over() {
        let command = match input::read_command() {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log!("Input failed, stopping session {}: {}", game.id(), e);
                return Err(e);
            }
        };

        match command {
            Command::Quit => {
                log!("Session {} quit after {} moves", game.id(), game.moves_made());
                return Ok(());
            }
            Command::Move(direction) => {
                println!("input: {:?}", direction);
                game.apply_move(direction);
            }
        }

        draw(&game, &config.render);
    }

    println!(
        "Game over after {} moves, highest tile {}",
        game.moves_made(),
        game.highest_tile()
    );
    Ok(())
}

fn draw(game: &Puzzle2048GameState, render_config: &RenderConfig) {
    match render::render_board(game.board(), render_config) {
        Ok(text) => {
            print!("{}", text);
            println!("{}", render::render_status(game));
        }
        Err(e) => log!("Failed to render board: {}", e),
    }
}

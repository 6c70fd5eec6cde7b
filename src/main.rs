use chess_board::assets::Assets;
use chess_board::board::Board;
use chess_board::game::Game;
use chess_board::window;
use chrono::Local;
use clap::Parser;
use env_logger::Target;
use log::{error, info, LevelFilter};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

/// Window edge used until the monitor size is known.
const INITIAL_SIZE: u32 = 640;

#[derive(Parser, Debug)]
#[command(about = "A chessboard for two players at one mouse. Enter starts a new game.")]
struct Arguments {
    #[arg(short, long, default_value = "resources", help = "directory holding <color>/<kind>.png")]
    resources: PathBuf,

    #[arg(short, long, help = "fixed board edge in pixels instead of fitting the monitor")]
    size: Option<u32>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[arg(long, help = "append log output to this file instead of stderr")]
    log: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = Arguments::parse();

    let mut logger = env_logger::Builder::new();
    logger
        .filter_level(if arguments.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{style}[{}] [{:5}]{style:#} {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
                style = buf.default_level_style(record.level()),
            )
        });

    if let Some(path) = &arguments.log {
        let file = std::fs::OpenOptions::new().append(true).create(true).open(path)?;
        logger.target(Target::Pipe(Box::new(file)));
    }
    logger.init();

    let assets = Assets::load(&arguments.resources).inspect_err(|err| error!("{err}"))?;
    info!("piece images loaded from {}", arguments.resources.display());

    let board = Board::new(arguments.size.unwrap_or(INITIAL_SIZE));
    info!("board is {} pixels, {} per cell", board.size(), board.cell_size());

    window::run(Game::new(assets, board), arguments.size.is_some())?;
    Ok(())
}

use std::{env, io};

use cli::ClientConfig;
use libgame::{Game, board::Glyphs};
use log::info;
use ticker::TickerHost;

mod cli;
mod renderer;
mod ticker;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ClientConfig::from_args(env::args().skip(1))?;
    info!("Starting with {config:?}");

    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();

    let mut board = config.board(&mut input, &mut stdout)?;
    let seed = config.seed_mode(&mut input, &mut stdout)?;
    board.seed(seed);
    info!("Seeded {0}x{0} board with {seed}", board.size());

    TickerHost::new(Game::new(board), config.interval, Glyphs::default()).run(&mut stdout)
}

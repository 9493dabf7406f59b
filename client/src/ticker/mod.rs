use std::{io::Write, time::Duration};

use libgame::{Game, board::Glyphs};
use log::trace;
use sleeper::Sleeper;

use crate::renderer;

pub mod sleeper;

/// Drives the render → advance → sleep cycle for a single game.
pub struct TickerHost {
    game: Game,
    glyphs: Glyphs,
    sleeper: Sleeper,
}

impl TickerHost {
    pub fn new(game: Game, interval: Duration, glyphs: Glyphs) -> Self {
        Self {
            game,
            glyphs,
            sleeper: Sleeper::new(interval),
        }
    }

    pub fn step<W>(&mut self, out: &mut W) -> anyhow::Result<()>
    where
        W: Write,
    {
        renderer::draw(out, &self.game, &self.glyphs)?;
        self.game.tick();

        if !self.sleeper.sleep() {
            trace!("Generation {} ran past the frame interval", self.game.generation());
        }

        Ok(())
    }

    /// Animates forever. Only returns if writing to the terminal fails.
    pub fn run<W>(mut self, out: &mut W) -> anyhow::Result<()>
    where
        W: Write,
    {
        loop {
            self.step(out)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use libgame::board::GameBoard;

    use super::*;

    #[test]
    fn steps_render_then_advance() {
        let mut board = GameBoard::new(8).unwrap();
        board.seed_glider();
        let glider = board.render(&Glyphs::default());

        let mut host = TickerHost::new(Game::new(board), Duration::ZERO, Glyphs::default());
        let mut out = Vec::new();

        host.step(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(&glider));
        assert_eq!(host.game.generation(), 1);

        for _ in 0..3 {
            host.step(&mut Vec::new()).unwrap();
        }
        assert_eq!(host.game.generation(), 4);
        assert_eq!(host.game.board().alive_count(), 5);
    }
}

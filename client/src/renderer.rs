use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use libgame::{Game, board::Glyphs};

/// Clears the terminal and draws the current generation followed by a status line.
pub fn draw<W>(out: &mut W, game: &Game, glyphs: &Glyphs) -> io::Result<()>
where
    W: Write,
{
    let board = game.board();

    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    queue!(out, Print(board.render(glyphs)), Print("\n"))?;
    queue!(
        out,
        Print(format!(
            "generation {} | {} alive | {}x{}\n",
            game.generation(),
            board.alive_count(),
            board.size(),
            board.size()
        ))
    )?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use libgame::board::{GameBoard, TileState};

    use super::*;

    #[test]
    fn draws_board_and_status() {
        let mut board = GameBoard::new(3).unwrap();
        board.set(1, 1, TileState::Alive);
        let game = Game::new(board);

        let mut out = Vec::new();
        draw(&mut out, &game, &Glyphs { alive: 'O', dead: '.' }).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("...\n.O.\n...\n"));
        assert!(text.ends_with("generation 0 | 1 alive | 3x3\n"));
    }

    #[test]
    fn clears_before_drawing() {
        let game = Game::new(GameBoard::new(2).unwrap());

        let mut out = Vec::new();
        draw(&mut out, &game, &Glyphs::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let clear_at = text.find("\x1b[2J").unwrap();
        let board_at = text.find("⬛⬛").unwrap();
        assert!(clear_at < board_at);
    }
}

use board::GameBoard;

pub mod board;
pub mod error;
pub mod pos;
pub mod rule;
pub mod seed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: GameBoard,
    generation: u64,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick(&mut self) {
        self.board = self.board.next_generation();
        self.generation += 1;
    }
}

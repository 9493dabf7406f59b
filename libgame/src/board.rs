use std::fmt;

use itertools::Itertools;
use rand::Rng;

use super::{
    error::GameError,
    pos::Position,
    rule::Rule,
    seed::{GLIDER, RANDOM_ALIVE_PROBABILITY, SeedMode},
};

/// Square board whose edges wrap around onto the opposite edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    size: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(size: usize) -> Result<Self, GameError> {
        // Wrapped coordinates are computed in isize, so the side must fit in one.
        let tile_count = (size != 0 && size <= isize::MAX as usize)
            .then(|| size.checked_mul(size))
            .flatten()
            .ok_or(GameError::InvalidArgument { size })?;

        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(tile_count)
            .map_err(|_| GameError::InvalidArgument { size })?;
        tiles.resize(tile_count, TileState::default());

        Ok(Self { size, tiles })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: isize, y: isize) -> TileState {
        self.tiles[self.wrapped_index(x, y)]
    }

    pub fn set(&mut self, x: isize, y: isize, state: TileState) {
        let index = self.wrapped_index(x, y);
        self.tiles[index] = state;
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    pub fn count_living_neighbors(&self, x: isize, y: isize) -> usize {
        const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        let center = Position::wrapped(x, y, self.size);
        let (x, y) = (center.x as isize, center.y as isize);

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter(|rel_pos| self.get(x + rel_pos[0], y + rel_pos[1]).is_alive())
            .count()
    }

    pub fn seed(&mut self, mode: SeedMode) {
        match mode {
            SeedMode::Glider => self.seed_glider(),
            SeedMode::Random => self.seed_random(),
        }
    }

    pub fn seed_glider(&mut self) {
        self.tiles.fill(TileState::Dead);

        for [x, y] in GLIDER {
            self.set(x, y, TileState::Alive);
        }
    }

    pub fn seed_random(&mut self) {
        self.fill_random(&mut rand::rng(), RANDOM_ALIVE_PROBABILITY);
    }

    pub fn seed_random_with<R>(&mut self, rng: &mut R, probability: f64) -> Result<(), GameError>
    where
        R: Rng,
    {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GameError::InvalidProbability(probability));
        }

        self.fill_random(rng, probability);
        Ok(())
    }

    /// `probability` must already be within `0.0..=1.0`.
    fn fill_random<R>(&mut self, rng: &mut R, probability: f64)
    where
        R: Rng,
    {
        for tile in &mut self.tiles {
            *tile = TileState::from_alive(rng.random_bool(probability));
        }
    }

    /// Computes the following generation from this one, which stays untouched.
    pub fn next_generation(&self) -> Self {
        let rule = Rule::CONWAY;

        let tiles = self
            .enumerate_tiles()
            .map(|(Position { x, y }, tile)| {
                let alive_neighbor_count = self.count_living_neighbors(x as isize, y as isize);
                TileState::from_alive(rule.next_alive(tile.is_alive(), alive_neighbor_count))
            })
            .collect();

        Self {
            size: self.size,
            tiles,
        }
    }

    pub fn render(&self, glyphs: &Glyphs) -> String {
        self.tiles
            .chunks(self.size)
            .map(|row| row.iter().map(|tile| glyphs.glyph(*tile)).collect::<String>())
            .join("\n")
    }

    fn wrapped_index(&self, x: isize, y: isize) -> usize {
        let Position { x, y } = Position::wrapped(x, y, self.size);
        x + (y * self.size)
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.size || y >= self.size {
            return None;
        }

        Some(x + (y * self.size))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.size;
        let x = index % self.size;
        Position { x, y }
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Glyphs::default()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn from_alive(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }

    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub fn glyph(&self, tile: TileState) -> char {
        match tile {
            TileState::Alive => self.alive,
            TileState::Dead => self.dead,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '🟩',
            dead: '⬛',
        }
    }
}

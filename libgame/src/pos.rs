#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Maps arbitrary signed coordinates onto a `size` x `size` torus.
    pub fn wrapped(x: isize, y: isize, size: usize) -> Self {
        let size = size as isize;
        Self {
            x: x.rem_euclid(size) as usize,
            y: y.rem_euclid(size) as usize,
        }
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_negative_and_overflowing_coordinates() {
        assert_eq!(Position::wrapped(-1, -1, 5), Position { x: 4, y: 4 });
        assert_eq!(Position::wrapped(5, 11, 5), Position { x: 0, y: 1 });
        assert_eq!(Position::wrapped(-13, 2, 5), Position { x: 2, y: 2 });
    }

    #[test]
    fn single_cell_torus_collapses_everything() {
        assert_eq!(Position::wrapped(-7, 42, 1), Position { x: 0, y: 0 });
    }
}

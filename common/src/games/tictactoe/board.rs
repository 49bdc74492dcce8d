use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row strings such as `"XO."`; any character other
    /// than `X` or `O` is an empty cell.
    #[cfg(test)]
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    /// Writes `mark` into an empty on-board cell. Occupied cells are never
    /// overwritten; returns whether the write happened.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) -> bool {
        match self.get(pos) {
            Some(Mark::Empty) if !mark.is_empty() => {
                self.cells[pos.row][pos.col] = mark;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    #[cfg(test)]
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|mark| !mark.is_empty())
            .count()
    }

    #[cfg(test)]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|mark| !mark.is_empty())
    }

    #[cfg(test)]
    pub fn available_moves(&self) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.cells[pos.row][pos.col].is_empty())
            .collect()
    }
}

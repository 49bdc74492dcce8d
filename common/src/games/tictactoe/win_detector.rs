use super::board::Board;
use super::types::{BOARD_SIZE, Position, WinningLine};

const fn line(cells: [(usize, usize); BOARD_SIZE]) -> [Position; BOARD_SIZE] {
    [
        Position::new(cells[0].0, cells[0].1),
        Position::new(cells[1].0, cells[1].1),
        Position::new(cells[2].0, cells[2].1),
    ]
}

/// Three rows, three columns, then the two diagonals.
pub const LINES: [[Position; BOARD_SIZE]; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]),
];

/// Scans all eight lines in order and returns the first one whose three
/// cells carry the same non-empty mark.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|cells| {
        let player = board.get(cells[0])?.player()?;
        cells[1..]
            .iter()
            .all(|&pos| board.get(pos) == Some(player.mark()))
            .then(|| WinningLine::new(player, *cells))
    })
}

//! Four-in-a-row detection around the most recently placed disc.

use super::{Board, Cell, Player, COLS, ROWS};

/// Discs in a row needed to win.
pub const CONNECT: usize = 4;

/// Axis vectors `(d_row, d_col)`, scanned in this order: horizontal,
/// vertical, diagonal down-right, diagonal down-left.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether the disc at `(row, col)` completes four in a row.
///
/// Returns the owning player if any axis through the cell holds at least
/// [`CONNECT`] contiguous discs of that player. Returns `None` for an empty
/// or out-of-range cell.
pub fn check_winner(board: &Board, row: usize, col: usize) -> Option<Player> {
    let player = occupant(board, row, col)?;
    AXES.iter()
        .any(|&axis| run_length(board, row, col, axis, player.disc()) >= CONNECT)
        .then_some(player)
}

/// The cells of the first winning run through `(row, col)`, ordered from
/// the negative end of the axis to the positive end.
pub fn winning_line(board: &Board, row: usize, col: usize) -> Option<Vec<(usize, usize)>> {
    let disc = occupant(board, row, col)?.disc();

    AXES.iter().find_map(|&(dr, dc)| {
        let back = sweep(board, row, col, (-dr, -dc), disc);
        let forward = sweep(board, row, col, (dr, dc), disc);
        if back + forward + 1 < CONNECT {
            return None;
        }

        let (r0, c0) = (row as isize - dr * back as isize, col as isize - dc * back as isize);
        let line = (0..=(back + forward) as isize)
            .map(|i| ((r0 + dr * i) as usize, (c0 + dc * i) as usize))
            .collect();
        Some(line)
    })
}

fn occupant(board: &Board, row: usize, col: usize) -> Option<Player> {
    if row >= ROWS || col >= COLS {
        return None;
    }
    board.get(row, col).player()
}

/// Total run along one axis, counting the center once.
fn run_length(board: &Board, row: usize, col: usize, (dr, dc): (isize, isize), disc: Cell) -> usize {
    1 + sweep(board, row, col, (dr, dc), disc) + sweep(board, row, col, (-dr, -dc), disc)
}

/// Matching discs from `(row, col)` in one direction, excluding the start.
fn sweep(board: &Board, row: usize, col: usize, (dr, dc): (isize, isize), disc: Cell) -> usize {
    let (mut r, mut c) = (row as isize + dr, col as isize + dc);
    let mut count = 0;
    while board.get_signed(r, c) == Some(disc) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(discs: &[(usize, Cell)]) -> Board {
        let mut board = Board::new();
        for &(col, cell) in discs {
            board.drop_piece(col, cell).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_cell_has_no_winner() {
        let board = Board::new();
        assert_eq!(check_winner(&board, 5, 3), None);
        assert_eq!(winning_line(&board, 5, 3), None);
    }

    #[test]
    fn test_out_of_range_has_no_winner() {
        let board = board_with(&[(0, Cell::Red)]);
        assert_eq!(check_winner(&board, 6, 0), None);
        assert_eq!(check_winner(&board, 0, 7), None);
    }

    #[test]
    fn test_horizontal_win_from_middle() {
        let board = board_with(&[
            (0, Cell::Red),
            (1, Cell::Red),
            (2, Cell::Red),
            (3, Cell::Red),
        ]);
        // Queried cell sits inside the run, both sweeps contribute
        assert_eq!(check_winner(&board, 5, 2), Some(Player::Red));
        assert_eq!(
            winning_line(&board, 5, 2),
            Some(vec![(5, 0), (5, 1), (5, 2), (5, 3)])
        );
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&[
            (0, Cell::Red),
            (0, Cell::Red),
            (0, Cell::Red),
            (0, Cell::Red),
        ]);
        assert_eq!(check_winner(&board, 2, 0), Some(Player::Red));
        assert_eq!(
            winning_line(&board, 2, 0),
            Some(vec![(2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn test_diagonal_rising_win() {
        // Red at (5,0), (4,1), (3,2), then (2,3)
        let board = board_with(&[
            (0, Cell::Red),
            (1, Cell::Yellow),
            (1, Cell::Red),
            (2, Cell::Yellow),
            (2, Cell::Yellow),
            (2, Cell::Red),
            (3, Cell::Yellow),
            (3, Cell::Yellow),
            (3, Cell::Yellow),
            (3, Cell::Red),
        ]);
        assert_eq!(board.get(2, 3), Cell::Red);
        assert_eq!(check_winner(&board, 2, 3), Some(Player::Red));
        assert_eq!(check_winner(&board, 4, 1), Some(Player::Red));
        assert_eq!(
            winning_line(&board, 2, 3),
            Some(vec![(2, 3), (3, 2), (4, 1), (5, 0)])
        );
    }

    #[test]
    fn test_diagonal_falling_win() {
        let board = board_with(&[
            (6, Cell::Yellow),
            (5, Cell::Red),
            (5, Cell::Yellow),
            (4, Cell::Red),
            (4, Cell::Red),
            (4, Cell::Yellow),
            (3, Cell::Red),
            (3, Cell::Red),
            (3, Cell::Red),
            (3, Cell::Yellow),
        ]);
        assert_eq!(check_winner(&board, 2, 3), Some(Player::Yellow));
        assert_eq!(
            winning_line(&board, 2, 3),
            Some(vec![(2, 3), (3, 4), (4, 5), (5, 6)])
        );
    }

    #[test]
    fn test_three_is_not_enough() {
        let board = board_with(&[(0, Cell::Red), (1, Cell::Red), (2, Cell::Red)]);
        for col in 0..3 {
            assert_eq!(check_winner(&board, 5, col), None);
        }
    }

    #[test]
    fn test_run_broken_by_opponent() {
        let board = board_with(&[
            (0, Cell::Red),
            (1, Cell::Red),
            (2, Cell::Yellow),
            (3, Cell::Red),
            (4, Cell::Red),
        ]);
        assert_eq!(check_winner(&board, 5, 1), None);
        assert_eq!(check_winner(&board, 5, 3), None);
    }

    #[test]
    fn test_winner_is_owner_of_queried_cell() {
        // Yellow has four in the bottom row, Red's disc above is not part of it
        let board = board_with(&[
            (0, Cell::Yellow),
            (1, Cell::Yellow),
            (2, Cell::Yellow),
            (3, Cell::Yellow),
            (3, Cell::Red),
        ]);
        assert_eq!(check_winner(&board, 5, 3), Some(Player::Yellow));
        assert_eq!(check_winner(&board, 4, 3), None);
    }

    #[test]
    fn test_five_in_a_row_line_covers_all() {
        let board = board_with(&[
            (1, Cell::Red),
            (2, Cell::Red),
            (3, Cell::Red),
            (4, Cell::Red),
            (5, Cell::Red),
        ]);
        assert_eq!(check_winner(&board, 5, 5), Some(Player::Red));
        assert_eq!(winning_line(&board, 5, 3).map(|line| line.len()), Some(5));
    }

    #[test]
    fn test_check_winner_is_idempotent() {
        let board = board_with(&[
            (0, Cell::Red),
            (0, Cell::Red),
            (0, Cell::Red),
            (0, Cell::Red),
        ]);
        let first = check_winner(&board, 2, 0);
        let second = check_winner(&board, 2, 0);
        assert_eq!(first, second);
        assert_eq!(board, board_with(&[(0, Cell::Red); 4]));
    }
}

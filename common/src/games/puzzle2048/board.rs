use super::types::{Direction, GameOverRule, Position, SpawnedTile};
use crate::games::session_rng::SessionRng;

pub const BOARD_SIZE: usize = 4;

/// One row or column, ordered so that index 0 is the edge tiles slide toward.
pub type Line = [u32; BOARD_SIZE];

/// Row-major grid. Zero is an empty cell, any other value is a tile.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Board {
    rows: [Line; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [Line; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Line; BOARD_SIZE] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Line {
        self.rows[row]
    }

    pub fn column(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.rows[row][col])
    }

    pub fn get(&self, position: Position) -> u32 {
        self.rows[position.row][position.col]
    }

    pub fn set(&mut self, position: Position, value: u32) {
        self.rows[position.row][position.col] = value;
    }

    pub fn line(&self, direction: Direction, index: usize) -> Line {
        match direction {
            Direction::Left => self.row(index),
            Direction::Right => reversed(self.row(index)),
            Direction::Up => self.column(index),
            Direction::Down => reversed(self.column(index)),
        }
    }

    /// Inverse of [`Board::line`]: writes `line` back in board orientation.
    pub fn set_line(&mut self, direction: Direction, index: usize, line: Line) {
        match direction {
            Direction::Left => self.rows[index] = line,
            Direction::Right => self.rows[index] = reversed(line),
            Direction::Up => self.set_column(index, line),
            Direction::Down => self.set_column(index, reversed(line)),
        }
    }

    fn set_column(&mut self, col: usize, line: Line) {
        for (row, value) in self.rows.iter_mut().zip(line) {
            row[col] = value;
        }
    }

    /// Slides and merges every line along `direction`. Returns the new board
    /// and whether any cell changed. `self` is left untouched.
    pub fn apply_move(&self, direction: Direction) -> (Board, bool) {
        let mut next = *self;
        let mut changed = false;

        for index in 0..BOARD_SIZE {
            let line = self.line(direction, index);
            let merged = slide_and_merge_line(line);
            if merged != line {
                changed = true;
                next.set_line(direction, index, merged);
            }
        }

        (next, changed)
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        positions().filter(|&pos| self.get(pos) == 0).collect()
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&value| value != 0)
    }

    pub fn has_valid_moves(&self) -> bool {
        if !self.is_full() {
            return true;
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.rows[row][col];
                if col + 1 < BOARD_SIZE && value == self.rows[row][col + 1] {
                    return true;
                }
                if row + 1 < BOARD_SIZE && value == self.rows[row + 1][col] {
                    return true;
                }
            }
        }

        false
    }

    pub fn is_terminal(&self, rule: GameOverRule) -> bool {
        match rule {
            GameOverRule::BoardFull => self.is_full(),
            GameOverRule::NoMovesLeft => !self.has_valid_moves(),
        }
    }

    /// Places a 2 or a 4 on a uniformly chosen empty cell. Returns `None` and
    /// leaves the board as is when there is no empty cell.
    pub fn spawn_tile(
        &mut self,
        rng: &mut SessionRng,
        four_spawn_percent: u32,
    ) -> Option<SpawnedTile> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let position = empty[rng.random_range(0..empty.len())];
        let value = if rng.random_percent(four_spawn_percent) { 4 } else { 2 };
        self.set(position, value);

        Some(SpawnedTile { position, value })
    }

    pub fn tile_sum(&self) -> u32 {
        self.rows.iter().flatten().sum()
    }

    pub fn tile_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&value| value != 0).count()
    }

    pub fn highest_tile(&self) -> u32 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }
}

fn positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
}

fn reversed(mut line: Line) -> Line {
    line.reverse();
    line
}

/// Moves every tile of `line` toward index 0, merging equal neighbours.
/// A tile produced by a merge does not merge again in the same call.
pub fn slide_and_merge_line(line: Line) -> Line {
    compress(merge(compress(line)))
}

fn compress(line: Line) -> Line {
    let mut out = [0; BOARD_SIZE];
    for (slot, value) in out.iter_mut().zip(line.into_iter().filter(|&v| v != 0)) {
        *slot = value;
    }
    out
}

fn merge(mut line: Line) -> Line {
    let mut i = 0;
    while i + 1 < BOARD_SIZE {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            line[i + 1] = 0;
            i += 2;
        } else {
            i += 1;
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_row(row: Line) -> Board {
        Board::from_rows([row, [0; 4], [0; 4], [0; 4]])
    }

    fn random_board(rng: &mut SessionRng) -> Board {
        let mut board = Board::empty();
        for pos in positions() {
            if rng.random_range(0..3) != 0 {
                board.set(pos, 1 << rng.random_range(1..5u32));
            }
        }
        board
    }

    fn no_moves_board() -> Board {
        Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
    }

    #[test]
    fn test_compress_only_unchanged() {
        let (board, changed) = single_row([2, 0, 0, 0]).apply_move(Direction::Left);
        assert_eq!(board.row(0), [2, 0, 0, 0]);
        assert!(!changed);
    }

    #[test]
    fn test_merge_pair() {
        let (board, changed) = single_row([2, 2, 0, 0]).apply_move(Direction::Left);
        assert_eq!(board.row(0), [4, 0, 0, 0]);
        assert!(changed);
    }

    #[test]
    fn test_chain_merges_first_pair_only() {
        let (board, changed) = single_row([2, 2, 2, 0]).apply_move(Direction::Left);
        assert_eq!(board.row(0), [4, 2, 0, 0]);
        assert!(changed);
    }

    #[test]
    fn test_distinct_tiles_compress() {
        let (board, changed) = single_row([2, 4, 0, 8]).apply_move(Direction::Left);
        assert_eq!(board.row(0), [2, 4, 8, 0]);
        assert!(changed);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        assert_eq!(slide_and_merge_line([4, 4, 8, 0]), [8, 8, 0, 0]);
        assert_eq!(slide_and_merge_line([2, 2, 4, 4]), [4, 8, 0, 0]);
        assert_eq!(slide_and_merge_line([2, 2, 2, 2]), [4, 4, 0, 0]);
    }

    #[test]
    fn test_merge_across_gap() {
        assert_eq!(slide_and_merge_line([2, 0, 0, 2]), [4, 0, 0, 0]);
        assert_eq!(slide_and_merge_line([0, 2, 0, 2]), [4, 0, 0, 0]);
    }

    #[test]
    fn test_move_right_merges_from_right_edge() {
        let (board, changed) = single_row([2, 2, 2, 0]).apply_move(Direction::Right);
        assert_eq!(board.row(0), [0, 0, 2, 4]);
        assert!(changed);
    }

    #[test]
    fn test_move_up_and_down_use_columns() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 8],
        ]);

        let (up, _) = board.apply_move(Direction::Up);
        assert_eq!(up.column(0), [4, 2, 0, 0]);
        assert_eq!(up.column(3), [8, 0, 0, 0]);

        let (down, _) = board.apply_move(Direction::Down);
        assert_eq!(down.column(0), [0, 0, 2, 4]);
        assert_eq!(down.column(3), [0, 0, 0, 8]);
    }

    #[test]
    fn test_apply_move_does_not_mutate_input() {
        let board = single_row([2, 2, 0, 0]);
        let _ = board.apply_move(Direction::Left);
        assert_eq!(board.row(0), [2, 2, 0, 0]);
    }

    #[test]
    fn test_line_round_trips_through_set_line() {
        let mut rng = SessionRng::new(3);
        let board = random_board(&mut rng);
        for direction in Direction::ALL {
            let mut copy = Board::empty();
            for index in 0..BOARD_SIZE {
                copy.set_line(direction, index, board.line(direction, index));
            }
            assert_eq!(copy, board, "{:?}", direction);
        }
    }

    #[test]
    fn test_full_board_without_pairs_is_stuck() {
        let board = no_moves_board();
        assert!(board.is_terminal(GameOverRule::NoMovesLeft));
        assert!(board.is_terminal(GameOverRule::BoardFull));
        for direction in Direction::ALL {
            let (next, changed) = board.apply_move(direction);
            assert!(!changed, "{:?}", direction);
            assert_eq!(next, board);
        }
    }

    #[test]
    fn test_full_board_with_pair_is_terminal_only_when_board_full_rule() {
        let mut board = no_moves_board();
        board.set(Position::new(3, 3), 4);
        assert!(board.is_terminal(GameOverRule::BoardFull));
        assert!(!board.is_terminal(GameOverRule::NoMovesLeft));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows([
            [2, 0, 2, 2],
            [2, 2, 2, 2],
            [2, 2, 2, 0],
            [2, 2, 2, 2],
        ]);
        assert_eq!(
            board.empty_cells(),
            vec![Position::new(0, 1), Position::new(2, 3)]
        );
        assert_eq!(Board::empty().empty_cells().len(), 16);
    }

    #[test]
    fn test_spawn_fills_one_empty_cell() {
        let mut rng = SessionRng::new(42);
        let mut board = single_row([2, 2, 4, 0]);
        let before = board;
        let spawned = board.spawn_tile(&mut rng, 10).unwrap();

        assert_eq!(before.get(spawned.position), 0);
        assert_eq!(board.get(spawned.position), spawned.value);
        assert!(spawned.value == 2 || spawned.value == 4);
        assert_eq!(board.tile_count(), before.tile_count() + 1);
    }

    #[test]
    fn test_spawn_value_follows_percent() {
        let mut rng = SessionRng::new(42);
        for _ in 0..50 {
            let mut board = Board::empty();
            assert_eq!(board.spawn_tile(&mut rng, 0).unwrap().value, 2);
            let mut board = Board::empty();
            assert_eq!(board.spawn_tile(&mut rng, 100).unwrap().value, 4);
        }
    }

    #[test]
    fn test_spawn_on_full_board_is_noop() {
        let mut rng = SessionRng::new(42);
        let mut board = no_moves_board();
        assert_eq!(board.spawn_tile(&mut rng, 10), None);
        assert_eq!(board, no_moves_board());
    }

    #[test]
    fn test_spawn_reaches_every_empty_cell() {
        let mut rng = SessionRng::new(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let mut board = Board::empty();
            seen.insert(board.spawn_tile(&mut rng, 10).unwrap().position);
        }
        assert_eq!(seen.len(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_moves_conserve_sum_and_never_add_tiles() {
        let mut rng = SessionRng::new(2048);
        for _ in 0..500 {
            let board = random_board(&mut rng);
            for direction in Direction::ALL {
                let (next, changed) = board.apply_move(direction);
                assert_eq!(next.tile_sum(), board.tile_sum());
                assert!(next.tile_count() <= board.tile_count());
                assert_eq!(changed, next != board);
            }
        }
    }

    #[test]
    fn test_move_without_merge_is_stable() {
        let mut rng = SessionRng::new(11);
        for _ in 0..500 {
            let board = random_board(&mut rng);
            for direction in Direction::ALL {
                let (once, _) = board.apply_move(direction);
                if once.tile_count() == board.tile_count() {
                    let (twice, changed) = once.apply_move(direction);
                    assert!(!changed);
                    assert_eq!(twice, once);
                }
            }
        }
    }

    #[test]
    fn test_repeated_moves_reach_fixed_point() {
        let mut rng = SessionRng::new(5);
        for _ in 0..500 {
            let mut board = random_board(&mut rng);
            for direction in Direction::ALL {
                for _ in 0..BOARD_SIZE {
                    board = board.apply_move(direction).0;
                }
                let (_, changed) = board.apply_move(direction);
                assert!(!changed);
            }
        }
    }

    #[test]
    fn test_highest_tile() {
        assert_eq!(Board::empty().highest_tile(), 0);
        assert_eq!(single_row([2, 64, 0, 8]).highest_tile(), 64);
    }
}

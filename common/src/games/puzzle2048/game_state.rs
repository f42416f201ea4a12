use super::board::{BOARD_SIZE, Board};
use super::settings::Puzzle2048Settings;
use super::types::{Direction, GameStatus, Position, SpawnedTile};
use crate::games::session_rng::SessionRng;
use crate::identifiers::SessionId;
use crate::log;

/// What a single move did to the session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub board: Board,
    pub changed: bool,
    pub spawned: Option<SpawnedTile>,
    pub game_over: bool,
}

pub struct Puzzle2048GameState {
    id: SessionId,
    board: Board,
    settings: Puzzle2048Settings,
    status: GameStatus,
    moves_made: u32,
    rng: SessionRng,
}

impl Puzzle2048GameState {
    pub fn new(id: SessionId, settings: Puzzle2048Settings, mut rng: SessionRng) -> Self {
        let board = seed_board(&mut rng);
        log!("Session {} started with seed {}", id, rng.seed());

        Self {
            id,
            board,
            settings,
            status: GameStatus::InProgress,
            moves_made: 0,
            rng,
        }
    }

    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status != GameStatus::InProgress {
            return MoveOutcome {
                board: self.board,
                changed: false,
                spawned: None,
                game_over: true,
            };
        }

        let (board, changed) = self.board.apply_move(direction);
        self.board = board;

        let mut spawned = None;
        if changed {
            self.moves_made += 1;
            spawned = self
                .board
                .spawn_tile(&mut self.rng, self.settings.four_spawn_percent);
            if spawned.is_none() {
                self.status = GameStatus::Over;
            }
        }

        if self.board.is_terminal(self.settings.game_over_rule) {
            self.status = GameStatus::Over;
        }

        match spawned {
            Some(tile) => log!(
                "Session {}: move {:?} #{}, spawned {} at ({}, {})",
                self.id,
                direction,
                self.moves_made,
                tile.value,
                tile.position.row,
                tile.position.col
            ),
            None if !changed => log!("Session {}: move {:?} changed nothing", self.id, direction),
            None => {}
        }

        if self.status == GameStatus::Over {
            log!(
                "Session {} over after {} moves, highest tile {}",
                self.id,
                self.moves_made,
                self.board.highest_tile()
            );
        }

        MoveOutcome {
            board: self.board,
            changed,
            spawned,
            game_over: self.status == GameStatus::Over,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn highest_tile(&self) -> u32 {
        self.board.highest_tile()
    }

    pub fn settings(&self) -> &Puzzle2048Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}

/// Two tiles on distinct cells, each a 2 or a 4 with equal odds.
fn seed_board(rng: &mut SessionRng) -> Board {
    const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

    let first = rng.random_range(0..CELLS);
    let mut second = rng.random_range(0..CELLS - 1);
    if second >= first {
        second += 1;
    }

    let mut board = Board::empty();
    for index in [first, second] {
        let value = if rng.random_range(0..2) == 0 { 2 } else { 4 };
        board.set(Position::new(index / BOARD_SIZE, index % BOARD_SIZE), value);
    }
    board
}

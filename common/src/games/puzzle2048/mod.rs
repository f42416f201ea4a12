mod board;
mod game_state;
mod settings;
mod types;

pub use board::{BOARD_SIZE, Board, Line, slide_and_merge_line};
pub use game_state::{MoveOutcome, Puzzle2048GameState};
pub use settings::Puzzle2048Settings;
pub use types::{Direction, GameOverRule, GameStatus, Position, SpawnedTile};

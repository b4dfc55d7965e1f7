mod board;
mod evaluate;
mod input;
mod player;
mod scoring;
mod zone;

pub use board::{
    Board, BoardError, BoardPoint, CheckerCount, PointNumber, MAX_CHECKERS, POINT_COUNT,
    QUARTER_LEN,
};
pub use evaluate::{evaluate, BoardEvaluator, Evaluation, EvaluationError, WinType};
pub use input::{GameError, GameResultInput, InputError, ValidGameInput};
pub use player::{PlayerId, PlayerMap, PlayerMapError};
pub use scoring::PointsTable;
pub use zone::Zone;

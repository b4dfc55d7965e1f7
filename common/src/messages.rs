use crate::nardy::{Evaluation, PlayerId, PointsTable, WinType};
use serde::{Deserialize, Serialize};

pub use crate::nardy::GameResultInput;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct GameResultOutput {
    pub winner: PlayerId,
    pub points: u32,
    pub win_type: WinType,
}

impl GameResultOutput {
    pub fn new(evaluation: &Evaluation, points: &PointsTable) -> Self {
        GameResultOutput {
            winner: evaluation.winner,
            points: points.points(evaluation.win_type),
            win_type: evaluation.win_type,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl ToString) -> Self {
        ErrorResponse {
            detail: detail.to_string(),
        }
    }
}

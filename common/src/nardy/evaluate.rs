use crate::nardy::board::Board;
use crate::nardy::input::ValidGameInput;
use crate::nardy::player::PlayerId;
use crate::nardy::zone::Zone;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EvaluationError {
    // A game still in progress, not a fault
    #[error("No winner can be determined from the current board state.")]
    NoWinner,
}

/// How badly the loser was beaten, from the mildest (`Oin`) to the worst
/// (`Koks`).
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WinType {
    Oin,
    Mars,
    Koks,
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinType::Oin => write!(f, "oin"),
            WinType::Mars => write!(f, "mars"),
            WinType::Koks => write!(f, "koks"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub win_type: WinType,
}

/// Decides the outcome of a finished game from a single board snapshot.
///
/// A player has won once they have nothing left on the bar and no checkers on
/// any point. Players are checked in declaration order, so if both somehow
/// qualify the first one declared wins. The win type is then read off the
/// loser's position relative to their own start offset:
///
/// - anything on the bar or in their first quarter is `Koks`
/// - otherwise anything past the first quarter is `Mars`
/// - otherwise `Oin`
pub struct BoardEvaluator<'a> {
    input: &'a ValidGameInput,
}

impl<'a> BoardEvaluator<'a> {
    pub fn new(input: &'a ValidGameInput) -> Self {
        BoardEvaluator { input }
    }

    pub fn evaluate(&self) -> Result<Evaluation, EvaluationError> {
        let [player1, player2] = self.input.players();
        let winner = self
            .determine_winner(player1, player2)
            .ok_or(EvaluationError::NoWinner)?;
        let loser = if winner == player1 { player2 } else { player1 };
        Ok(Evaluation {
            winner,
            loser,
            win_type: self.win_type(&loser),
        })
    }

    pub fn determine_winner(&self, player1: PlayerId, player2: PlayerId) -> Option<PlayerId> {
        if self.all_checkers_off(&player1) {
            Some(player1)
        } else if self.all_checkers_off(&player2) {
            Some(player2)
        } else {
            None
        }
    }

    pub fn all_checkers_off(&self, player: &PlayerId) -> bool {
        self.board().bar_count(player) == 0 && self.board().checkers_on_board(player) == 0
    }

    pub fn win_type(&self, loser: &PlayerId) -> WinType {
        if self.on_bar_or_first_quarter(loser) {
            WinType::Koks
        } else if self.outside_home(loser) {
            WinType::Mars
        } else {
            WinType::Oin
        }
    }

    fn on_bar_or_first_quarter(&self, player: &PlayerId) -> bool {
        let zone = Zone::first_quarter(self.input.start_position(player));
        self.board().bar_count(player) > 0 || self.board().checkers_in_zone(player, &zone) > 0
    }

    fn outside_home(&self, player: &PlayerId) -> bool {
        let zone = Zone::home_outside(self.input.start_position(player));
        self.board().checkers_in_zone(player, &zone) > 0
    }

    fn board(&self) -> &Board {
        self.input.board()
    }
}

pub fn evaluate(input: &ValidGameInput) -> Result<Evaluation, EvaluationError> {
    BoardEvaluator::new(input).evaluate()
}

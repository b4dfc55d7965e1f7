use crate::nardy::board::{Board, POINT_COUNT};
use crate::nardy::evaluate::EvaluationError;
use crate::nardy::player::{PlayerId, PlayerMap};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Expected exactly 2 players in bar_counts, found {0}")]
    PlayerCount(usize),
    #[error("start_position must name the same players as bar_counts")]
    StartPositionMismatch,
    #[error("Point {number} is occupied by unknown player {player}")]
    UnknownPlayer { number: u8, player: PlayerId },
    #[error("Board has {0} points, the maximum is {}", POINT_COUNT)]
    TooManyPoints(usize),
}

// Everything that can go wrong between a parsed request and a result
#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GameResultInput {
    pub board: Board,
    pub start_position: PlayerMap<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidGameInput {
    // Declaration order from bar_counts
    players: [PlayerId; 2],
    board: Board,
    start_position: PlayerMap<i32>,
}

impl ValidGameInput {
    // validates:
    // - exactly two players
    // - start positions given for exactly those players
    // - points only occupied by those players
    // - no more points than the board has
    pub fn new(input: GameResultInput) -> Result<Self, InputError> {
        let GameResultInput {
            board,
            start_position,
        } = input;

        let players: Vec<PlayerId> = board.bar_counts.players().collect();
        let players: [PlayerId; 2] = players
            .try_into()
            .map_err(|v: Vec<PlayerId>| InputError::PlayerCount(v.len()))?;

        if !board.bar_counts.same_players(&start_position) {
            return Err(InputError::StartPositionMismatch);
        }

        if board.points.len() > usize::from(POINT_COUNT) {
            return Err(InputError::TooManyPoints(board.points.len()));
        }

        let unknown = board.points.iter().find_map(|p| {
            p.occupied_by
                .filter(|id| !players.contains(id))
                .map(|player| (p.number.get(), player))
        });
        if let Some((number, player)) = unknown {
            return Err(InputError::UnknownPlayer { number, player });
        }

        Ok(ValidGameInput {
            players,
            board,
            start_position,
        })
    }

    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn start_position(&self, player: &PlayerId) -> i32 {
        // Both players are guaranteed a start position by construction
        self.start_position.get(player).copied().unwrap_or(0)
    }
}

impl TryFrom<GameResultInput> for ValidGameInput {
    type Error = InputError;

    fn try_from(input: GameResultInput) -> Result<Self, Self::Error> {
        ValidGameInput::new(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nardy::board::{BoardPoint, CheckerCount, PointNumber};
    use uuid::Uuid;

    fn id(n: u128) -> PlayerId {
        PlayerId::new(Uuid::from_u128(n))
    }

    fn point(number: u8, count: u8, player: Option<PlayerId>) -> BoardPoint {
        BoardPoint::new(
            PointNumber::new(number).unwrap(),
            CheckerCount::new(count).unwrap(),
            player,
        )
    }

    fn input(bar: Vec<(PlayerId, u32)>, start: Vec<(PlayerId, i32)>) -> GameResultInput {
        GameResultInput {
            board: Board::new(PlayerMap::new(bar).unwrap(), vec![]),
            start_position: PlayerMap::new(start).unwrap(),
        }
    }

    #[test]
    fn test_valid_input() {
        let (p1, p2) = (id(1), id(2));
        let mut raw = input(vec![(p2, 0), (p1, 1)], vec![(p1, 0), (p2, 12)]);
        raw.board.points = vec![point(3, 2, Some(p1)), point(15, 1, Some(p2))];
        let valid = ValidGameInput::new(raw).unwrap();
        assert_eq!(valid.players(), [p2, p1]);
        assert_eq!(valid.start_position(&p1), 0);
        assert_eq!(valid.start_position(&p2), 12);
        assert_eq!(valid.board().points.len(), 2);
    }

    #[test]
    fn test_wrong_player_count() {
        let raw = input(vec![(id(1), 0)], vec![(id(1), 0)]);
        assert_eq!(ValidGameInput::new(raw), Err(InputError::PlayerCount(1)));

        let raw = input(
            vec![(id(1), 0), (id(2), 0), (id(3), 0)],
            vec![(id(1), 0), (id(2), 0), (id(3), 0)],
        );
        assert_eq!(ValidGameInput::new(raw), Err(InputError::PlayerCount(3)));

        let raw = input(vec![], vec![]);
        assert_eq!(ValidGameInput::new(raw), Err(InputError::PlayerCount(0)));
    }

    #[test]
    fn test_start_position_mismatch() {
        let raw = input(vec![(id(1), 0), (id(2), 0)], vec![(id(1), 0), (id(3), 12)]);
        assert_eq!(
            ValidGameInput::new(raw),
            Err(InputError::StartPositionMismatch)
        );

        let raw = input(vec![(id(1), 0), (id(2), 0)], vec![(id(1), 0)]);
        assert_eq!(
            ValidGameInput::new(raw),
            Err(InputError::StartPositionMismatch)
        );
    }

    #[test]
    fn test_unknown_occupant() {
        let mut raw = input(vec![(id(1), 0), (id(2), 0)], vec![(id(1), 0), (id(2), 12)]);
        raw.board.points = vec![point(3, 2, Some(id(1))), point(9, 1, Some(id(7)))];
        assert_eq!(
            ValidGameInput::new(raw),
            Err(InputError::UnknownPlayer {
                number: 9,
                player: id(7)
            })
        );
    }

    #[test]
    fn test_too_many_points() {
        let mut raw = input(vec![(id(1), 0), (id(2), 0)], vec![(id(1), 0), (id(2), 12)]);
        raw.board.points = (0..25).map(|i| point(i % 24, 0, None)).collect();
        assert_eq!(ValidGameInput::new(raw), Err(InputError::TooManyPoints(25)));
    }

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "board": {
                "bar_counts": {
                    "3fa85f64-5717-4562-b3fc-2c963f66afa6": 0,
                    "12345678-90ab-cdef-1234-567890abcdef": 1
                },
                "points": [
                    {
                        "number": 0,
                        "checkers_count": 0,
                        "occupied_by": "3fa85f64-5717-4562-b3fc-2c963f66afa6"
                    }
                ]
            },
            "start_position": {
                "3fa85f64-5717-4562-b3fc-2c963f66afa6": 0,
                "12345678-90ab-cdef-1234-567890abcdef": 12
            }
        }"#;
        let raw: GameResultInput = serde_json::from_str(json).unwrap();
        let valid = ValidGameInput::new(raw).unwrap();
        let first = PlayerId::new(Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap());
        assert_eq!(valid.players()[0], first);
    }
}

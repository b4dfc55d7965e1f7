use crate::nardy::player::{PlayerId, PlayerMap};
use crate::nardy::zone::Zone;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const POINT_COUNT: u8 = 24;
pub const MAX_CHECKERS: u8 = 15;
// Length of a player's first quarter, counted from their start position
pub const QUARTER_LEN: i32 = 6;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Point number {0} is outside the board (0..={})", POINT_COUNT - 1)]
    PointOutOfRange(u8),
    #[error("Checker count {0} exceeds the maximum of {}", MAX_CHECKERS)]
    TooManyCheckers(u8),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct PointNumber(u8);

impl PointNumber {
    pub fn new(number: u8) -> Result<Self, BoardError> {
        if number >= POINT_COUNT {
            return Err(BoardError::PointOutOfRange(number));
        }
        Ok(PointNumber(number))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PointNumber {
    type Error = BoardError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        PointNumber::new(number)
    }
}

impl From<PointNumber> for u8 {
    fn from(number: PointNumber) -> u8 {
        number.0
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(try_from = "u8", into = "u8")]
pub struct CheckerCount(u8);

impl CheckerCount {
    pub fn new(count: u8) -> Result<Self, BoardError> {
        if count > MAX_CHECKERS {
            return Err(BoardError::TooManyCheckers(count));
        }
        Ok(CheckerCount(count))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CheckerCount {
    type Error = BoardError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        CheckerCount::new(count)
    }
}

impl From<CheckerCount> for u8 {
    fn from(count: CheckerCount) -> u8 {
        count.0
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct BoardPoint {
    pub number: PointNumber,
    pub checkers_count: CheckerCount,
    // An empty point has no owner, whatever its count says
    #[serde(default)]
    pub occupied_by: Option<PlayerId>,
}

impl BoardPoint {
    pub fn new(
        number: PointNumber,
        checkers_count: CheckerCount,
        occupied_by: Option<PlayerId>,
    ) -> Self {
        BoardPoint {
            number,
            checkers_count,
            occupied_by,
        }
    }

    pub fn is_occupied_by(&self, player: &PlayerId) -> bool {
        self.occupied_by.as_ref() == Some(player)
    }
}

// Points that are not listed are empty. Point numbers are not required to be
// unique; counts on repeated numbers add up.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Board {
    pub bar_counts: PlayerMap<u32>,
    pub points: Vec<BoardPoint>,
}

impl Board {
    pub fn new(bar_counts: PlayerMap<u32>, points: Vec<BoardPoint>) -> Self {
        Board { bar_counts, points }
    }

    // Players missing from the bar map have nothing on the bar
    pub fn bar_count(&self, player: &PlayerId) -> u32 {
        self.bar_counts.get(player).copied().unwrap_or(0)
    }

    pub fn checkers_on_board(&self, player: &PlayerId) -> u32 {
        self.count_checkers(player, |_| true)
    }

    pub fn checkers_in_zone(&self, player: &PlayerId, zone: &Zone) -> u32 {
        self.count_checkers(player, |p| zone.contains(p.number))
    }

    fn count_checkers<F: Fn(&BoardPoint) -> bool>(&self, player: &PlayerId, filter: F) -> u32 {
        self.points
            .iter()
            .filter(|p| p.is_occupied_by(player) && filter(p))
            .map(|p| u32::from(p.checkers_count.get()))
            .sum()
    }
}

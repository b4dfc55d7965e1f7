use crate::nardy::board::{PointNumber, POINT_COUNT, QUARTER_LEN};

const BOARD_END: i32 = POINT_COUNT as i32;

// Half-open range of point numbers, [start, end). Bounds are signed because
// start positions are plain offsets and aren't range-checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    start: i32,
    end: i32,
}

impl Zone {
    pub fn new(start: i32, end: i32) -> Self {
        Zone { start, end }
    }

    /// The first six points from `start`, cut off at the end of the board.
    pub fn first_quarter(start: i32) -> Self {
        Zone::new(start, start.saturating_add(QUARTER_LEN).min(BOARD_END))
    }

    /// Everything past the first quarter up to the end of the board. Empty
    /// when the first quarter already reaches the end.
    pub fn home_outside(start: i32) -> Self {
        Zone::new(start.saturating_add(QUARTER_LEN), BOARD_END)
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, number: PointNumber) -> bool {
        let number = i32::from(number.get());
        self.start <= number && number < self.end
    }
}

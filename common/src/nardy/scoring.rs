use crate::nardy::evaluate::WinType;
use serde::{Deserialize, Serialize};

// Points the winner scores for each win type
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointsTable {
    pub oin: u32,
    pub mars: u32,
    pub koks: u32,
}

impl PointsTable {
    pub fn new(oin: u32, mars: u32, koks: u32) -> Self {
        PointsTable { oin, mars, koks }
    }

    pub fn points(&self, win_type: WinType) -> u32 {
        match win_type {
            WinType::Oin => self.oin,
            WinType::Mars => self.mars,
            WinType::Koks => self.koks,
        }
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        PointsTable::new(1, 2, 3)
    }
}

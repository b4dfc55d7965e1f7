pub mod messages;
pub mod nardy;

pub use nardy::*;

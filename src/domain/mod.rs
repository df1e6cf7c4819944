pub mod board;
pub mod card;
pub mod column;
pub mod command;

pub use board::{Board, BoardConfig, NoopReason, Outcome};
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use command::{Command, Direction};

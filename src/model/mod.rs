// Aggregates the split model files
pub mod adapter;
pub mod display;
pub mod item;
pub mod parser;

pub use item::{Expense, Task, TaskKind};
pub use parser::{Instruction, parse};

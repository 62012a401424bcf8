// Human-readable rendering of records for listings and confirmations.
use crate::model::item::{Expense, Task, TaskKind};
use chrono::NaiveDateTime;
use std::fmt;

pub const DISPLAY_DATETIME_FORMAT: &str = "%b %-d %Y, %H:%M";
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d %Y";

fn fmt_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_DATETIME_FORMAT).to_string()
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.done { "X" } else { " " };
        write!(f, "[{}][{}] {}", self.kind.tag(), check, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", fmt_datetime(by)),
            TaskKind::Event { start, end } => write!(
                f,
                " (time: {} to {})",
                fmt_datetime(start),
                fmt_datetime(end)
            ),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[$] ${:.2} {} (on: {})",
            self.amount,
            self.description,
            self.date.format(DISPLAY_DATE_FORMAT)
        )
    }
}

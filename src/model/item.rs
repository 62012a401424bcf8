use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        by: NaiveDateTime,
    },
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter tag used both in listings and in the save file.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Event { start, end })
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Exact (case-sensitive) substring match on the description.
    pub fn matches(&self, query: &str) -> bool {
        self.description.contains(query)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
        }
    }
}

// Handles save-file serialization/deserialization of records.
//
// Task lines:    <T|D|E> | <0|1> | <description> [| <datetime> [| <datetime>]]
// Expense lines: X | <amount> | <description> | <date>
use crate::model::item::{Expense, Task, TaskKind};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

pub const FIELD_SEPARATOR: &str = " | ";
pub const EXPENSE_TAG: &str = "X";

const SAVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const SAVE_DATETIME_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const SAVE_DATE_FORMAT: &str = "%Y-%m-%d";

fn write_datetime(dt: &NaiveDateTime) -> String {
    if dt.second() == 0 {
        dt.format(SAVE_DATETIME_FORMAT).to_string()
    } else {
        dt.format(SAVE_DATETIME_SECONDS_FORMAT).to_string()
    }
}

fn read_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, SAVE_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, SAVE_DATETIME_SECONDS_FORMAT))
        .ok()
}

fn read_done_flag(s: &str) -> Option<bool> {
    match s {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

impl Task {
    pub fn to_save_line(&self) -> String {
        let done = if self.done { "1" } else { "0" };
        let mut fields = vec![
            self.kind.tag().to_string(),
            done.to_string(),
            self.description.clone(),
        ];
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => fields.push(write_datetime(by)),
            TaskKind::Event { start, end } => {
                fields.push(write_datetime(start));
                fields.push(write_datetime(end));
            }
        }
        fields.join(FIELD_SEPARATOR)
    }

    /// Parses one save-file line. Returns `None` for anything malformed,
    /// including unknown type tags.
    pub fn from_save_line(line: &str) -> Option<Task> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < 3 {
            return None;
        }
        let done = read_done_flag(fields[1])?;
        let description = fields[2];
        if description.is_empty() {
            return None;
        }

        let kind = match (fields[0], fields.len()) {
            ("T", 3) => TaskKind::Todo,
            ("D", 4) => TaskKind::Deadline {
                by: read_datetime(fields[3])?,
            },
            ("E", 5) => TaskKind::Event {
                start: read_datetime(fields[3])?,
                end: read_datetime(fields[4])?,
            },
            _ => return None,
        };

        Some(Task {
            description: description.to_string(),
            done,
            kind,
        })
    }
}

impl Expense {
    pub fn to_save_line(&self) -> String {
        [
            EXPENSE_TAG.to_string(),
            self.amount.to_string(),
            self.description.clone(),
            self.date.format(SAVE_DATE_FORMAT).to_string(),
        ]
        .join(FIELD_SEPARATOR)
    }

    pub fn from_save_line(line: &str) -> Option<Expense> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != 4 || fields[0] != EXPENSE_TAG || fields[2].is_empty() {
            return None;
        }
        let amount = fields[1].parse::<f64>().ok().filter(|a| a.is_finite())?;
        let date = NaiveDate::parse_from_str(fields[3], SAVE_DATE_FORMAT).ok()?;
        Some(Expense::new(fields[2], amount, date))
    }
}

/// Serializes a slice of records, one line each, newline terminated.
pub fn encode_lines<'a, T, I>(items: I, to_line: fn(&T) -> String) -> String
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for item in items {
        out.push_str(&to_line(item));
        out.push('\n');
    }
    out
}

/// Parses every line of a save file, skipping blank and malformed lines.
/// A line that is not valid UTF-8 counts as malformed; the rest of the file
/// still loads. `what` only labels the warnings.
pub fn decode_lines<T>(content: &[u8], what: &str, from_line: fn(&str) -> Option<T>) -> Vec<T> {
    let mut items = Vec::new();
    for (number, raw) in content.split(|b| *b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            log::warn!("Skipping {} line {}: not valid UTF-8", what, number + 1);
            continue;
        };
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        match from_line(line) {
            Some(item) => items.push(item),
            None => log::warn!("Skipping malformed {} line {}: {:?}", what, number + 1, line),
        }
    }
    items
}

pub fn encode_tasks(tasks: &[Task]) -> String {
    encode_lines(tasks, Task::to_save_line)
}

pub fn decode_tasks(content: &[u8]) -> Vec<Task> {
    decode_lines(content, "task", Task::from_save_line)
}

pub fn encode_expenses(expenses: &[Expense]) -> String {
    encode_lines(expenses, Expense::to_save_line)
}

pub fn decode_expenses(content: &[u8]) -> Vec<Expense> {
    decode_lines(content, "expense", Expense::from_save_line)
}

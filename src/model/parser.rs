// Turns one line of user input into a Command.
use crate::command::Command;
use crate::error::{DATE_HINT, DATETIME_HINT, TallyError, TallyResult};
use crate::model::item::{Expense, Task};
use chrono::{NaiveDate, NaiveDateTime};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

pub const BY_MARKER: &str = " /by ";
pub const AT_MARKER: &str = " /at ";
pub const TO_MARKER: &str = " /to ";
pub const DOLLARS_MARKER: &str = " /dollars ";
pub const ON_MARKER: &str = " /on ";

const INPUT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// The leading keyword of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Instruction {
    Todo,
    Deadline,
    Event,
    Expense,
    List,
    Done,
    Find,
    Delete,
    Bye,
}

impl Instruction {
    /// Usage line shown in help output.
    pub fn usage(&self) -> String {
        match self {
            Instruction::Todo => "TODO <description>".to_string(),
            Instruction::Deadline => format!("DEADLINE <description> /by <{}>", DATETIME_HINT),
            Instruction::Event => format!(
                "EVENT <description> /at <{}> /to <{}>",
                DATETIME_HINT, DATETIME_HINT
            ),
            Instruction::Expense => {
                format!("EXPENSE <amount> /dollars <description> /on <{}>", DATE_HINT)
            }
            Instruction::List => "LIST [tasks|expenses]".to_string(),
            Instruction::Done => "DONE <task number>".to_string(),
            Instruction::Find => "FIND <text>".to_string(),
            Instruction::Delete => "DELETE <task number>".to_string(),
            Instruction::Bye => "BYE".to_string(),
        }
    }

    fn format_error(&self) -> TallyError {
        TallyError::format(format!("{} requires a format of {}.", self, self.usage()))
    }
}

/// Splits a line on its first whitespace into instruction word and details.
pub fn split_instruction(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, details)) => (word, details.trim()),
        None => (line, ""),
    }
}

pub fn parse(input: &str) -> TallyResult<Command> {
    let line = input.trim();
    if line.is_empty() {
        return Err(TallyError::EmptyCommand);
    }

    let (word, details) = split_instruction(line);
    let instruction = Instruction::from_str(word).map_err(|_| TallyError::CommandNotFound)?;

    match instruction {
        Instruction::Todo => parse_todo(details),
        Instruction::Deadline => parse_deadline(details),
        Instruction::Event => parse_event(details),
        Instruction::Expense => parse_expense(details),
        Instruction::List => parse_list(details),
        Instruction::Done => parse_index(details).map(Command::Mark),
        Instruction::Delete => parse_index(details).map(Command::Delete),
        Instruction::Find => parse_find(details),
        Instruction::Bye => Ok(Command::Exit),
    }
}

pub fn parse_datetime(s: &str) -> TallyResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), INPUT_DATETIME_FORMAT)
        .map_err(|_| TallyError::bad_datetime())
}

pub fn parse_date(s: &str) -> TallyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT).map_err(|_| TallyError::bad_date())
}

/// Validates a description: non-empty, and free of the save-file separator.
fn description(s: &str) -> TallyResult<String> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TallyError::EmptyDescription);
    }
    if s.contains('|') {
        return Err(TallyError::format("Descriptions cannot contain '|'."));
    }
    Ok(s.to_string())
}

/// Splits `s` around `marker`. A marker at the very start (its leading
/// space trimmed away with the details) yields an empty left side.
fn split_marker<'a>(s: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    if let Some(rest) = s.strip_prefix(marker.trim_start()) {
        return Some(("", rest));
    }
    s.split_once(marker)
}

fn parse_todo(details: &str) -> TallyResult<Command> {
    Ok(Command::AddTask(Task::todo(description(details)?)))
}

fn parse_deadline(details: &str) -> TallyResult<Command> {
    if details.is_empty() {
        return Err(TallyError::EmptyDescription);
    }
    let (desc, by) = split_marker(details, BY_MARKER)
        .ok_or_else(|| Instruction::Deadline.format_error())?;
    let desc = description(desc)?;
    let by = parse_datetime(by)?;
    Ok(Command::AddTask(Task::deadline(desc, by)))
}

fn parse_event(details: &str) -> TallyResult<Command> {
    if details.is_empty() {
        return Err(TallyError::EmptyDescription);
    }
    let (desc, when) = split_marker(details, AT_MARKER)
        .ok_or_else(|| Instruction::Event.format_error())?;
    let desc = description(desc)?;
    let (start, end) = split_marker(when, TO_MARKER)
        .ok_or_else(|| Instruction::Event.format_error())?;
    let start = parse_datetime(start)?;
    let end = parse_datetime(end)?;
    if end < start {
        return Err(TallyError::format("An event cannot end before it starts."));
    }
    Ok(Command::AddTask(Task::event(desc, start, end)))
}

fn parse_expense(details: &str) -> TallyResult<Command> {
    if details.is_empty() {
        return Err(TallyError::EmptyDescription);
    }
    let (amount, rest) = split_marker(details, DOLLARS_MARKER)
        .ok_or_else(|| Instruction::Expense.format_error())?;
    let amount = amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .ok_or(TallyError::InvalidAmount)?;
    let (desc, date) = split_marker(rest, ON_MARKER)
        .ok_or_else(|| Instruction::Expense.format_error())?;
    let desc = description(desc)?;
    let date = parse_date(date)?;
    Ok(Command::AddExpense(Expense::new(desc, amount, date)))
}

fn parse_list(details: &str) -> TallyResult<Command> {
    match details.to_lowercase().as_str() {
        "" | "tasks" => Ok(Command::ListTasks),
        "expenses" => Ok(Command::ListExpenses),
        _ => Err(TallyError::format("Use 'LIST tasks' or 'LIST expenses'.")),
    }
}

fn parse_index(details: &str) -> TallyResult<usize> {
    if details.is_empty() {
        return Err(TallyError::EmptyIndex);
    }
    details
        .parse::<usize>()
        .map_err(|_| TallyError::InvalidIndex)
}

fn parse_find(details: &str) -> TallyResult<Command> {
    if details.is_empty() {
        return Err(TallyError::EmptySearch);
    }
    Ok(Command::Find(details.to_string()))
}

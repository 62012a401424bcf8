//! User-facing error type for everything a typed command can get wrong.
//!
//! Infrastructure failures (file I/O, config parsing) stay on `anyhow`;
//! this type is reserved for mistakes the user can fix by retyping the line.
use thiserror::Error;

pub const DATETIME_HINT: &str = "yyyy-MM-dd HH:mm";
pub const DATE_HINT: &str = "yyyy-MM-dd";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("I can only read plain text. That line had characters I could not decode.")]
    NotText,

    #[error("Please type a command. Try TODO, DEADLINE, EVENT, EXPENSE, LIST, DONE, FIND, DELETE or BYE.")]
    EmptyCommand,

    #[error("Sorry, I don't know that command. Try TODO, DEADLINE, EVENT, EXPENSE, LIST, DONE, FIND, DELETE or BYE.")]
    CommandNotFound,

    #[error("The description cannot be empty.")]
    EmptyDescription,

    #[error("Please tell me which task number to use.")]
    EmptyIndex,

    #[error("The task number must be a positive whole number.")]
    InvalidIndex,

    #[error("Please tell me what to search for.")]
    EmptySearch,

    #[error("The expense amount must be a number, e.g. 12.50.")]
    InvalidAmount,

    #[error("There is no task number {index}. The list has {len} task(s).")]
    IndexOutOfRange { index: usize, len: usize },

    /// A malformed command, carrying a hint about the expected format.
    #[error("{0}")]
    Format(String),
}

impl TallyError {
    pub fn format(hint: impl Into<String>) -> Self {
        Self::Format(hint.into())
    }

    pub fn bad_datetime() -> Self {
        Self::Format(format!("Date and time should be in the format of {}.", DATETIME_HINT))
    }

    pub fn bad_date() -> Self {
        Self::Format(format!("Date should be in the format of {}.", DATE_HINT))
    }
}

pub type TallyResult<T> = std::result::Result<T, TallyError>;

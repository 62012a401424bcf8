// Output side of the conversation. Commands only ever talk to `dyn Ui`.
use crate::error::TallyError;
use std::io::Write;

pub const WELCOME_MESSAGE: &str =
    "Hello! I'm Tally.\nI keep track of your tasks and expenses. What can I do for you?";
pub const EXIT_MESSAGE: &str = "Bye. Hope to see you again soon!";
pub const LIST_MESSAGE: &str = "Here are the tasks in your list:";
pub const EMPTY_LIST_MESSAGE: &str = "Your task list is empty.";
pub const EXPENSE_LIST_MESSAGE: &str = "Here are your expenses:";
pub const EMPTY_EXPENSE_MESSAGE: &str = "You have not recorded any expenses.";
pub const FIND_MESSAGE: &str = "Here are the matching tasks in your list:";
pub const NO_MATCH_MESSAGE: &str = "No tasks match your search.";

const DIVIDER: &str = "____________________________________________________________";

pub trait Ui {
    fn show_message(&mut self, message: &str);

    fn show_error(&mut self, error: &TallyError) {
        self.show_message(&format!("OOPS! {}", error));
    }

    fn show_welcome(&mut self) {
        self.show_message(WELCOME_MESSAGE);
    }
}

/// Prints each reply framed by divider lines, indented like a chat bot.
pub struct ConsoleUi<W: Write> {
    out: W,
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleUi<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Ui for ConsoleUi<W> {
    fn show_message(&mut self, message: &str) {
        let mut framed = format!("    {}\n", DIVIDER);
        for line in message.lines() {
            framed.push_str(&format!("     {}\n", line));
        }
        framed.push_str(&format!("    {}\n", DIVIDER));
        if let Err(e) = self.out.write_all(framed.as_bytes()).and_then(|_| self.out.flush()) {
            log::error!("Failed to write to console: {}", e);
        }
    }
}

/// Collects replies in memory, oldest first.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    pub messages: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything said so far, joined into one reply.
    pub fn take_reply(&mut self) -> String {
        std::mem::take(&mut self.messages).join("\n")
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Ui for Transcript {
    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

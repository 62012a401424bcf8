// File: src/controller.rs
//! Central logic controller: owns the lists and the storage.
//! Every front end (console REPL, chat TUI) feeds raw lines in here and
//! renders whatever comes back through its `Ui`.
use crate::command::Command;
use crate::error::TallyError;
use crate::model::parser;
use crate::storage::Storage;
use crate::store::{ExpenseList, TaskList};
use crate::ui::Ui;
use anyhow::Result;
use std::io::BufRead;

#[derive(Debug)]
pub struct Controller {
    tasks: TaskList,
    expenses: ExpenseList,
    storage: Storage,
}

impl Controller {
    /// Loads both save files. An unreadable file is an error; a missing
    /// one is an empty list.
    pub fn open(storage: Storage) -> Result<Self> {
        let tasks = TaskList::from_tasks(storage.load()?);
        let expenses = ExpenseList::from_expenses(storage.load_expenses()?);
        Ok(Self {
            tasks,
            expenses,
            storage,
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn expenses(&self) -> &ExpenseList {
        &self.expenses
    }

    /// Handles one line of input. User mistakes are reported through `ui`
    /// and never end the session. Returns `true` once the user says BYE.
    pub fn handle(&mut self, line: &str, ui: &mut dyn Ui) -> bool {
        let command = match parser::parse(line) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                ui.show_error(&e);
                return false;
            }
        };

        match command.execute(&mut self.tasks, &mut self.expenses, ui, &self.storage) {
            Ok(()) if command.is_mutating() => {
                log::info!(
                    "Lists now hold {} task(s), {} expense(s)",
                    self.tasks.len(),
                    self.expenses.len()
                );
            }
            Ok(()) => {}
            Err(e) => ui.show_error(&e),
        }
        command.is_exit()
    }

    /// Reads lines until BYE or end of input. End of input also says goodbye.
    /// A line that is not valid UTF-8 is reported and skipped.
    pub fn run<R: BufRead>(&mut self, mut input: R, ui: &mut dyn Ui) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            match std::str::from_utf8(&buf) {
                Ok(line) => {
                    if self.handle(line, ui) {
                        return Ok(());
                    }
                }
                Err(e) => {
                    log::debug!("Rejected input that is not UTF-8: {}", e);
                    ui.show_error(&TallyError::NotText);
                }
            }
        }
        log::info!("Input closed without BYE");
        Command::Exit.execute(&mut self.tasks, &mut self.expenses, ui, &self.storage)?;
        Ok(())
    }
}

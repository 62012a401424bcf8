//! The closed set of actions a command line can produce, and how each one
//! is carried out against the lists.
use crate::error::TallyResult;
use crate::model::{Expense, Task};
use crate::storage::Storage;
use crate::store::{ExpenseList, TaskList, render_numbered};
use crate::ui::{self, Ui};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddTask(Task),
    AddExpense(Expense),
    ListTasks,
    ListExpenses,
    /// 1-based task number.
    Mark(usize),
    /// 1-based task number.
    Delete(usize),
    Find(String),
    Exit,
}

fn count_line(n: usize) -> String {
    let noun = if n == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.", n, noun)
}

fn persist_tasks(storage: &Storage, tasks: &TaskList) {
    if let Err(e) = storage.save(tasks.as_slice()) {
        log::error!("{:#}", e);
    }
}

impl Command {
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Whether running this command changes what is on disk.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::AddTask(_) | Command::AddExpense(_) | Command::Mark(_) | Command::Delete(_)
        )
    }

    /// Runs the command. Range errors leave the lists untouched; a failed
    /// save is logged and does not undo the in-memory change.
    pub fn execute(
        &self,
        tasks: &mut TaskList,
        expenses: &mut ExpenseList,
        ui: &mut dyn Ui,
        storage: &Storage,
    ) -> TallyResult<()> {
        log::debug!("Executing {:?}", self);
        match self {
            Command::AddTask(task) => {
                let added = tasks.add(task.clone()).to_string();
                ui.show_message(&format!(
                    "Got it. I've added this task:\n  {}\n{}",
                    added,
                    count_line(tasks.len())
                ));
                persist_tasks(storage, tasks);
            }
            Command::AddExpense(expense) => {
                let added = expenses.add(expense.clone()).to_string();
                ui.show_message(&format!(
                    "Noted. I've recorded this expense:\n  {}\nTotal spent: ${:.2}",
                    added,
                    expenses.total()
                ));
                if let Err(e) = storage.save_expenses(expenses.as_slice()) {
                    log::error!("{:#}", e);
                }
            }
            Command::ListTasks => {
                if tasks.is_empty() {
                    ui.show_message(ui::EMPTY_LIST_MESSAGE);
                } else {
                    ui.show_message(&format!("{}\n{}", ui::LIST_MESSAGE, tasks.render()));
                }
            }
            Command::ListExpenses => {
                if expenses.is_empty() {
                    ui.show_message(ui::EMPTY_EXPENSE_MESSAGE);
                } else {
                    ui.show_message(&format!(
                        "{}\n{}",
                        ui::EXPENSE_LIST_MESSAGE,
                        expenses.render()
                    ));
                }
            }
            Command::Mark(index) => {
                let marked = tasks.mark(*index)?.to_string();
                ui.show_message(&format!(
                    "Nice! I've marked this task as done:\n  {}",
                    marked
                ));
                persist_tasks(storage, tasks);
            }
            Command::Delete(index) => {
                let removed = tasks.delete(*index)?;
                ui.show_message(&format!(
                    "Noted. I've removed this task:\n  {}\n{}",
                    removed,
                    count_line(tasks.len())
                ));
                persist_tasks(storage, tasks);
            }
            Command::Find(query) => {
                let hits = tasks.find(query);
                if hits.is_empty() {
                    ui.show_message(ui::NO_MATCH_MESSAGE);
                } else {
                    ui.show_message(&format!(
                        "{}\n{}",
                        ui::FIND_MESSAGE,
                        render_numbered(hits)
                    ));
                }
            }
            Command::Exit => ui.show_message(ui::EXIT_MESSAGE),
        }
        Ok(())
    }
}

// File: src/store.rs
// In-memory lists of tasks and expenses. User-facing indices are 1-based.
use crate::error::{TallyError, TallyResult};
use crate::model::{Expense, Task};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task at a 1-based index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    fn position(&self, index: usize) -> TallyResult<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TallyError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }

    pub fn add(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn mark(&mut self, index: usize) -> TallyResult<&Task> {
        let pos = self.position(index)?;
        self.tasks[pos].mark_done();
        Ok(&self.tasks[pos])
    }

    pub fn delete(&mut self, index: usize) -> TallyResult<Task> {
        let pos = self.position(index)?;
        Ok(self.tasks.remove(pos))
    }

    /// Tasks whose description contains `query`, paired with their 1-based index.
    pub fn find(&self, query: &str) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.matches(query))
            .map(|(i, t)| (i + 1, t))
            .collect()
    }

    /// Numbered listing, one task per line.
    pub fn render(&self) -> String {
        render_numbered(self.tasks.iter().enumerate().map(|(i, t)| (i + 1, t)))
    }
}

pub fn render_numbered<'a>(rows: impl IntoIterator<Item = (usize, &'a Task)>) -> String {
    rows.into_iter()
        .map(|(n, t)| format!("{}. {}", n, t))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseList {
    expenses: Vec<Expense>,
}

impl ExpenseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn add(&mut self, expense: Expense) -> &Expense {
        self.expenses.push(expense);
        &self.expenses[self.expenses.len() - 1]
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .expenses
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {}", i + 1, e))
            .collect();
        lines.push(format!("Total: ${:.2}", self.total()));
        lines.join("\n")
    }
}

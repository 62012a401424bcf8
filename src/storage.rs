// Manages the flat save files for tasks and expenses.
//
// Both files are whole-file read / whole-file overwrite. A missing file is an
// empty list; malformed lines are skipped by the decoder.
use crate::config::Config;
use crate::context::AppContext;
use crate::model::adapter::{decode_expenses, decode_tasks, encode_expenses, encode_tasks};
use crate::model::{Expense, Task};
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Storage {
    task_path: PathBuf,
    expense_path: PathBuf,
}

impl Storage {
    pub fn new(task_path: impl Into<PathBuf>, expense_path: impl Into<PathBuf>) -> Self {
        Self {
            task_path: task_path.into(),
            expense_path: expense_path.into(),
        }
    }

    /// Builds a storage whose file locations come from the config,
    /// resolved against the context's data directory.
    /// The two files must differ: each list overwrites its whole file.
    pub fn from_config(ctx: &dyn AppContext, config: &Config) -> Result<Self> {
        let task_path = ctx.resolve_data_file(&config.task_file)?;
        let expense_path = ctx.resolve_data_file(&config.expense_file)?;
        if task_path == expense_path {
            bail!(
                "task_file and expense_file both point to {}",
                task_path.display()
            );
        }
        Ok(Self::new(task_path, expense_path))
    }

    pub fn task_path(&self) -> &Path {
        &self.task_path
    }

    pub fn expense_path(&self) -> &Path {
        &self.expense_path
    }

    /// Write to a .tmp sibling then rename over the target.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Reads a whole file as raw bytes, treating "not found" as empty.
    /// Text decoding happens per line in the adapter.
    fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        let Some(content) = Self::read_optional(&self.task_path)? else {
            log::info!("No task file at {}, starting empty", self.task_path.display());
            return Ok(vec![]);
        };
        let tasks = decode_tasks(&content);
        log::info!("Loaded {} task(s) from {}", tasks.len(), self.task_path.display());
        Ok(tasks)
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        Self::atomic_write(&self.task_path, encode_tasks(tasks))
            .with_context(|| format!("Failed to save tasks to {}", self.task_path.display()))?;
        log::debug!("Saved {} task(s)", tasks.len());
        Ok(())
    }

    pub fn load_expenses(&self) -> Result<Vec<Expense>> {
        let Some(content) = Self::read_optional(&self.expense_path)? else {
            return Ok(vec![]);
        };
        let expenses = decode_expenses(&content);
        log::info!(
            "Loaded {} expense(s) from {}",
            expenses.len(),
            self.expense_path.display()
        );
        Ok(expenses)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        Self::atomic_write(&self.expense_path, encode_expenses(expenses)).with_context(|| {
            format!(
                "Failed to save expenses to {}",
                self.expense_path.display()
            )
        })?;
        log::debug!("Saved {} expense(s)", expenses.len());
        Ok(())
    }
}

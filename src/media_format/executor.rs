//! Applying or discarding a rename plan.
//!
//! The executor is a small state machine:
//! `Pending` → `Confirmed` | `Declined` → `Applied` | `Discarded`.
//! Without a confirmation requirement, `Pending` goes straight to `Applied`.
//! There is no rollback: a failed rename leaves earlier renames in place.

use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use crate::media_format::{RenameAction, RenamePlan};

/// Executor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorState {
    Pending,
    Confirmed,
    Declined,
    Applied,
    Discarded,
}

impl fmt::Display for ExecutorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
            Self::Applied => "applied",
            Self::Discarded => "discarded",
        };
        write!(f, "{name}")
    }
}

/// A file that was renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub original: String,
    pub new_name: String,
}

/// A rename that failed. The file keeps its original name.
#[derive(Debug)]
pub struct RenameFailure {
    pub original: String,
    pub target: String,
    pub error: io::Error,
}

impl fmt::Display for RenameFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.original, self.target, self.error)
    }
}

/// Result of applying a plan.
#[derive(Debug, Default)]
pub struct ApplySummary {
    pub renamed: Vec<RenamedFile>,
    pub failures: Vec<RenameFailure>,
    /// Entries without a new name.
    pub skipped: usize,
    /// Entries that already had their new name.
    pub unchanged: usize,
}

impl ApplySummary {
    /// True when some renames failed after others succeeded.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty() && !self.renamed.is_empty()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Final outcome of executing a plan.
#[derive(Debug)]
pub enum ExecutionOutcome {
    Applied(ApplySummary),
    Discarded,
}

impl ExecutionOutcome {
    #[must_use]
    pub const fn state(&self) -> ExecutorState {
        match self {
            Self::Applied(_) => ExecutorState::Applied,
            Self::Discarded => ExecutorState::Discarded,
        }
    }
}

/// Applies a [`RenamePlan`] inside a directory.
#[derive(Debug)]
pub struct PlanExecutor {
    root: PathBuf,
    plan: RenamePlan,
    state: ExecutorState,
}

impl PlanExecutor {
    /// Create a pending executor for the plan. File names are relative to `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, plan: RenamePlan) -> Self {
        Self {
            root: root.into(),
            plan,
            state: ExecutorState::Pending,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ExecutorState {
        self.state
    }

    #[must_use]
    pub const fn plan(&self) -> &RenamePlan {
        &self.plan
    }

    /// Record the user's decision on the previewed plan.
    ///
    /// Only has an effect while pending.
    pub fn confirm(&mut self, accepted: bool) -> ExecutorState {
        if self.state == ExecutorState::Pending {
            self.state = if accepted {
                ExecutorState::Confirmed
            } else {
                ExecutorState::Declined
            };
        }
        self.state
    }

    /// Run the plan, asking `decide` first when confirmation is required.
    ///
    /// # Errors
    /// Returns an error only if the decision function fails;
    /// rename failures are collected in the [`ApplySummary`].
    pub fn execute<F>(mut self, require_confirmation: bool, decide: F) -> io::Result<ExecutionOutcome>
    where
        F: FnOnce(&RenamePlan) -> io::Result<bool>,
    {
        if require_confirmation {
            let accepted = decide(&self.plan)?;
            self.confirm(accepted);
        }
        Ok(self.finish())
    }

    /// Apply the plan unless it was declined, in which case it is discarded.
    #[must_use]
    pub fn finish(self) -> ExecutionOutcome {
        match self.state {
            ExecutorState::Pending | ExecutorState::Confirmed => ExecutionOutcome::Applied(self.apply()),
            ExecutorState::Declined | ExecutorState::Applied | ExecutorState::Discarded => {
                ExecutionOutcome::Discarded
            }
        }
    }

    /// Discard the plan without touching the filesystem.
    #[must_use]
    pub fn discard(self) -> ExecutionOutcome {
        ExecutionOutcome::Discarded
    }

    fn apply(&self) -> ApplySummary {
        let mut summary = ApplySummary::default();
        for entry in self.plan.entries() {
            let new_name = match &entry.action {
                RenameAction::Skip(_) => {
                    summary.skipped += 1;
                    continue;
                }
                RenameAction::Rename(new_name) => new_name,
            };
            if entry.is_unchanged() {
                summary.unchanged += 1;
                continue;
            }
            match self.rename(&entry.original, new_name) {
                Ok(()) => summary.renamed.push(RenamedFile {
                    original: entry.original.clone(),
                    new_name: new_name.clone(),
                }),
                Err(error) => summary.failures.push(RenameFailure {
                    original: entry.original.clone(),
                    target: new_name.clone(),
                    error,
                }),
            }
        }
        summary
    }

    /// Rename a single file without overwriting anything.
    fn rename(&self, original: &str, new_name: &str) -> io::Result<()> {
        let path = self.root.join(original);
        let new_path = self.root.join(new_name);
        if new_path.exists() {
            let capitalization_change_only = original.to_lowercase() == new_name.to_lowercase()
                && !name_exists_exactly(&self.root, new_name)?;
            if !capitalization_change_only {
                return Err(io::Error::new(io::ErrorKind::AlreadyExists, "target already exists"));
            }
            return rename_with_temp_file(&path, &new_path);
        }
        fs::rename(&path, &new_path)
    }
}

/// Check for a directory entry with exactly this name, ignoring case-insensitive lookups.
fn name_exists_exactly(root: &Path, name: &str) -> io::Result<bool> {
    for entry in fs::read_dir(root)? {
        if entry?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rename a file with an intermediate temp file to work around case-insensitive file systems.
fn rename_with_temp_file(path: &Path, new_path: &Path) -> io::Result<()> {
    let temp_file = unused_temp_path(new_path);
    fs::rename(path, &temp_file)?;
    fs::rename(&temp_file, new_path)
}

/// First of `<name>.tmp`, `<name>.1.tmp`, `<name>.2.tmp`... that does not exist yet.
fn unused_temp_path(new_path: &Path) -> PathBuf {
    let mut temp_file = crate::append_extension_to_path(new_path.to_path_buf(), "tmp");
    let mut index = 1;
    while temp_file.exists() {
        temp_file = crate::append_extension_to_path(new_path.to_path_buf(), format!("{index}.tmp"));
        index += 1;
    }
    temp_file
}

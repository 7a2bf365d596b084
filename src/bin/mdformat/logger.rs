use std::fs;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use media_formatter::media_format::{ExecutionOutcome, MatchSet, RenamePlan, describe_entry};

use crate::config::Config;

/// Simple file logger for rename runs with buffered writes
pub struct FileLogger {
    writer: BufWriter<File>,
}

impl FileLogger {
    /// Create a new file logger, writing to ~/logs/media-formatter/mdformat_<timestamp>.log
    pub(crate) fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Self::in_directory(&home_dir.join("logs").join(env!("CARGO_PKG_NAME")))
    }

    /// Create a new file logger in the given directory.
    pub(crate) fn in_directory(log_dir: &Path) -> Result<Self> {
        if !log_dir.exists() {
            fs::create_dir_all(log_dir).context("Failed to create log directory")?;
        }

        let log_path = log_dir.join(format!("mdformat_{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S")));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    fn timestamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Log when starting the program
    pub(crate) fn log_init(&mut self, root: &Path, title: &str, config: &Config) {
        let _ = writeln!(
            self.writer,
            "[{}] INIT \"{}\" title: \"{title}\"",
            Self::timestamp(),
            root.display()
        );
        let _ = writeln!(self.writer, "  dryrun: {}", config.dryrun);
        let _ = writeln!(self.writer, "  force: {}", config.force);
        let _ = writeln!(self.writer, "  ignore_case: {}", config.ignore_case);
        let _ = self.writer.flush();
    }

    /// Log the match result and every entry of the plan
    pub(crate) fn log_plan(&mut self, matches: &MatchSet, plan: &RenamePlan) {
        let _ = writeln!(
            self.writer,
            "[{}] MATCH   {} token \"{}\" | {} file(s)",
            Self::timestamp(),
            matches.strategy(),
            matches.token(),
            matches.files().len()
        );
        for entry in plan.entries() {
            let _ = writeln!(self.writer, "  {}", describe_entry(entry));
        }
        let _ = self.writer.flush();
    }

    /// Log what happened to the plan
    pub(crate) fn log_outcome(&mut self, outcome: &ExecutionOutcome) {
        match outcome {
            ExecutionOutcome::Discarded => {
                let _ = writeln!(self.writer, "[{}] DISCARD original filenames kept", Self::timestamp());
            }
            ExecutionOutcome::Applied(summary) => {
                for renamed in &summary.renamed {
                    let _ = writeln!(
                        self.writer,
                        "[{}] RENAME  \"{}\" -> \"{}\"",
                        Self::timestamp(),
                        renamed.original,
                        renamed.new_name
                    );
                }
                for failure in &summary.failures {
                    let _ = writeln!(
                        self.writer,
                        "[{}] ERROR   \"{}\" -> \"{}\" | {}",
                        Self::timestamp(),
                        failure.original,
                        failure.target,
                        failure.error
                    );
                }
                let _ = writeln!(
                    self.writer,
                    "[{}] DONE    renamed: {} | failed: {} | skipped: {} | unchanged: {}",
                    Self::timestamp(),
                    summary.renamed.len(),
                    summary.failures.len(),
                    summary.skipped,
                    summary.unchanged
                );
            }
        }
        let _ = self.writer.flush();
    }
}

/// Open the logger if logging is enabled, warning instead of failing the run.
pub(crate) fn open_logger(config: &Config) -> Option<FileLogger> {
    if !config.log {
        return None;
    }
    match FileLogger::new() {
        Ok(logger) => Some(logger),
        Err(error) => {
            media_formatter::print_warning!("Failed to create log file: {error}");
            None
        }
    }
}

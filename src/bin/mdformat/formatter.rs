use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use media_formatter::media_format::{
    self, CascadingMatcher, DirectoryListing, ExecutionOutcome, PlanExecutor, RenamePlan,
};

use crate::config::Config;
use crate::logger;

const TITLE_PROMPT: &str = "Hint: it must resemble at least one word of the original filenames\n\
                            Enter new basename for all files to be renamed: ";

/// Match, preview and rename the media files in the given directory.
pub fn format_directory(root: &Path, config: &Config) -> Result<()> {
    match rename_files(root, config)? {
        ExecutionOutcome::Applied(summary) if summary.has_failures() => anyhow::bail!(
            "{} of {} renames failed",
            summary.failures.len(),
            summary.failures.len() + summary.renamed.len()
        ),
        _ => Ok(()),
    }
}

/// Run the whole rename flow and return what happened to the plan.
fn rename_files(root: &Path, config: &Config) -> Result<ExecutionOutcome> {
    println!("{}", format!("Renaming files in {}", root.display()).bold());

    let listing = DirectoryListing::read(root)?;
    listing.ensure_not_empty()?;
    if config.verbose {
        println!("Found {} file(s)", listing.len());
    }

    let title = match &config.title {
        Some(title) => title.clone(),
        None => media_formatter::prompt_for_input(TITLE_PROMPT).context("Failed to read base title")?,
    };

    let matches = CascadingMatcher::new(config.ignore_case).find_matches(&listing, &title)?;
    if config.verbose {
        media_format::print_match_info(&matches);
    }

    let plan = RenamePlan::build(&matches, &title);
    let mut logger = logger::open_logger(config);
    if let Some(logger) = logger.as_mut() {
        logger.log_init(root, &title, config);
        logger.log_plan(&matches, &plan);
    }

    media_format::print_plan(&plan);

    let executor = PlanExecutor::new(root, plan);
    let rename_count = executor.plan().rename_count();
    let outcome = if config.dryrun {
        println!(
            "Dryrun: would have renamed {rename_count} {}",
            if rename_count == 1 { "file" } else { "files" }
        );
        executor.discard()
    } else if rename_count == 0 {
        println!("{}", "Nothing to rename".yellow());
        executor.finish()
    } else {
        if config.force {
            println!("{}", "Applying changes...".bold());
        }
        executor
            .execute(!config.force, |_| {
                let accepted = media_formatter::confirm_with_user("Keep changes?")?;
                if accepted {
                    println!("{}", "Applying changes...".bold());
                }
                Ok(accepted)
            })
            .context("Failed to read confirmation")?
    };

    if let Some(logger) = logger.as_mut() {
        logger.log_outcome(&outcome);
    }
    match &outcome {
        ExecutionOutcome::Discarded if !config.dryrun => {
            println!("{}", "Original filenames have been kept.".green());
        }
        ExecutionOutcome::Discarded => {}
        ExecutionOutcome::Applied(summary) => media_format::print_summary(summary),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;

    use media_formatter::media_format::FormatError;
    use tempfile::{TempDir, tempdir};

    fn create_files(names: &[&str]) -> TempDir {
        let dir = tempdir().unwrap();
        for name in names {
            File::create(dir.path().join(name)).unwrap();
        }
        dir
    }

    fn forced_config(title: &str) -> Config {
        Config {
            force: true,
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn file_names(dir: &TempDir) -> Vec<String> {
        DirectoryListing::read(dir.path()).unwrap().files().to_vec()
    }

    #[test]
    fn test_format_directory_renames_matches() {
        let dir = create_files(&["Show.S01E01.mkv", "Show.S01E02.mkv", "random.txt"]);
        format_directory(dir.path(), &forced_config("Show")).unwrap();
        assert_eq!(file_names(&dir), ["ShowE01.mkv", "ShowE02.mkv", "random.txt"]);
    }

    #[test]
    fn test_format_directory_dryrun_keeps_files() {
        let dir = create_files(&["Show.S01E01.mkv"]);
        let config = Config {
            dryrun: true,
            ..forced_config("Show")
        };
        format_directory(dir.path(), &config).unwrap();
        assert_eq!(file_names(&dir), ["Show.S01E01.mkv"]);
    }

    #[test]
    fn test_format_directory_empty_directory() {
        let dir = tempdir().unwrap();
        let error = format_directory(dir.path(), &forced_config("Show")).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<FormatError>(),
            Some(FormatError::EmptyDirectory { .. })
        ));
    }

    #[test]
    fn test_format_directory_no_match() {
        let dir = create_files(&["random.txt"]);
        let error = format_directory(dir.path(), &forced_config("Show")).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<FormatError>(),
            Some(FormatError::NoMatch { hint }) if hint == "Show"
        ));
        assert_eq!(file_names(&dir), ["random.txt"]);
    }

    #[test]
    fn test_format_directory_only_skips() {
        let dir = create_files(&["episode_no_number.mkv"]);
        format_directory(dir.path(), &forced_config("episode")).unwrap();
        assert_eq!(file_names(&dir), ["episode_no_number.mkv"]);
    }

    #[test]
    fn test_rename_files_reports_skips_without_renames() {
        let dir = create_files(&["episode_no_number.mkv"]);
        let config = Config {
            force: false,
            ..forced_config("episode")
        };
        let ExecutionOutcome::Applied(summary) = rename_files(dir.path(), &config).unwrap() else {
            panic!("plan with only skips should still be applied");
        };
        assert_eq!(summary.skipped, 1);
        assert!(summary.renamed.is_empty());
        assert_eq!(file_names(&dir), ["episode_no_number.mkv"]);
    }

    #[test]
    fn test_rename_files_dryrun_discards() {
        let dir = create_files(&["Show.S01E01.mkv"]);
        let config = Config {
            dryrun: true,
            ..forced_config("Show")
        };
        let outcome = rename_files(dir.path(), &config).unwrap();
        assert!(matches!(outcome, ExecutionOutcome::Discarded));
        assert_eq!(file_names(&dir), ["Show.S01E01.mkv"]);
    }
}

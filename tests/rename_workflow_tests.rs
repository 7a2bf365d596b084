//! End-to-end tests for listing, matching, planning and renaming in a real directory.

use std::fs::File;
use std::path::Path;

use media_formatter::media_format::{
    CascadingMatcher, DirectoryListing, ExecutionOutcome, FormatError, PlanExecutor, RenamePlan, Strategy,
};
use tempfile::{TempDir, tempdir};

fn create_files(names: &[&str]) -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    for name in names {
        File::create(dir.path().join(name)).expect("Failed to create file");
    }
    dir
}

fn file_names(root: &Path) -> Vec<String> {
    DirectoryListing::read(root).expect("listing should succeed").files().to_vec()
}

/// List, match, plan and apply without confirmation.
fn run(root: &Path, hint: &str) -> Result<ExecutionOutcome, FormatError> {
    let listing = DirectoryListing::read(root)?;
    let matches = CascadingMatcher::default().find_matches(&listing, hint)?;
    let plan = RenamePlan::build(&matches, hint);
    Ok(PlanExecutor::new(root, plan).finish())
}

#[test]
fn renames_matching_series_and_leaves_other_files() {
    let dir = create_files(&["Show.S01E01.mkv", "Show.S01E02.mkv", "random.txt"]);

    let ExecutionOutcome::Applied(summary) = run(dir.path(), "Show").unwrap() else {
        panic!("plan should be applied");
    };

    assert_eq!(summary.renamed.len(), 2);
    assert_eq!(file_names(dir.path()), ["ShowE01.mkv", "ShowE02.mkv", "random.txt"]);
}

#[test]
fn second_run_converges() {
    let dir = create_files(&["Show.S01E01.mkv", "Show 1x02.mkv", "notes.txt"]);
    run(dir.path(), "Show").unwrap();

    let listing = DirectoryListing::read(dir.path()).unwrap();
    let matches = CascadingMatcher::default().find_matches(&listing, "Show").unwrap();
    assert_eq!(matches.strategy(), Strategy::WholeHint);
    assert_eq!(matches.files(), ["ShowE01.mkv", "ShowE02.mkv"]);

    let plan = RenamePlan::build(&matches, "Show");
    assert!(plan.entries().iter().all(|entry| entry.is_unchanged()));
    assert_eq!(plan.rename_count(), 0);

    let ExecutionOutcome::Applied(summary) = PlanExecutor::new(dir.path(), plan).finish() else {
        panic!("plan should be applied");
    };
    assert!(summary.renamed.is_empty());
    assert_eq!(summary.unchanged, 2);
    assert_eq!(file_names(dir.path()), ["ShowE01.mkv", "ShowE02.mkv", "notes.txt"]);
}

#[test]
fn skipped_file_is_untouched_and_counted() {
    let dir = create_files(&["episode_no_number.mkv"]);

    let ExecutionOutcome::Applied(summary) = run(dir.path(), "episode").unwrap() else {
        panic!("plan should be applied");
    };

    assert_eq!(summary.skipped, 1);
    assert!(summary.renamed.is_empty());
    assert!(summary.failures.is_empty());
    assert_eq!(file_names(dir.path()), ["episode_no_number.mkv"]);
}

#[test]
fn empty_directory_fails_before_planning() {
    let dir = tempdir().unwrap();
    let mut asked = false;

    let result = DirectoryListing::read(dir.path()).and_then(|listing| {
        let matches = CascadingMatcher::default().find_matches(&listing, "Show")?;
        let executor = PlanExecutor::new(dir.path(), RenamePlan::build(&matches, "Show"));
        executor.execute(true, |_| {
            asked = true;
            Ok(true)
        })
        .map_err(|source| FormatError::Io {
            path: dir.path().to_path_buf(),
            source,
        })
    });

    assert!(matches!(result, Err(FormatError::EmptyDirectory { .. })));
    assert!(!asked);
}

#[test]
fn unmatched_hint_is_reported() {
    let dir = create_files(&["random.txt", "other.mkv"]);
    let result = run(dir.path(), "Missing Series");
    assert!(matches!(result, Err(FormatError::NoMatch { ref hint }) if hint == "Missing Series"));
    assert_eq!(file_names(dir.path()), ["other.mkv", "random.txt"]);
}

#[test]
fn mixed_naming_conventions_with_camel_case_hint() {
    let dir = create_files(&[
        "[Group] Cool Adventure - E01 [1080p].mkv",
        "[Group] Cool Adventure - E02 [1080p].mkv",
        "Cool Adventure OST.mp3",
        "unrelated.nfo",
    ]);

    let listing = DirectoryListing::read(dir.path()).unwrap();
    let matches = CascadingMatcher::default().find_matches(&listing, "CoolAdventure").unwrap();
    assert_eq!(matches.strategy(), Strategy::CamelCase);
    assert_eq!(matches.token(), "Cool");

    let plan = RenamePlan::build(&matches, "CoolAdventure");
    let new_names: Vec<Option<&str>> = plan.entries().iter().map(|entry| entry.new_name()).collect();
    assert_eq!(new_names, [None, Some("CoolAdventureE01.mkv"), Some("CoolAdventureE02.mkv")]);

    let _ = PlanExecutor::new(dir.path(), plan).finish();
    assert_eq!(
        file_names(dir.path()),
        [
            "Cool Adventure OST.mp3",
            "CoolAdventureE01.mkv",
            "CoolAdventureE02.mkv",
            "unrelated.nfo"
        ]
    );
}

#[test]
fn declined_plan_changes_nothing() {
    let dir = create_files(&["Show 1x01.mkv", "Show 1x02.mkv"]);
    let listing = DirectoryListing::read(dir.path()).unwrap();
    let matches = CascadingMatcher::default().find_matches(&listing, "Show").unwrap();
    let executor = PlanExecutor::new(dir.path(), RenamePlan::build(&matches, "Show"));

    let outcome = executor.execute(true, |_| Ok(false)).unwrap();

    assert!(matches!(outcome, ExecutionOutcome::Discarded));
    assert_eq!(file_names(dir.path()), ["Show 1x01.mkv", "Show 1x02.mkv"]);
}

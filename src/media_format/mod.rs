//! Media directory formatting.
//!
//! Finds the files of a single series in a directory from an approximate base title,
//! extracts their episode numbers, and renames them to `{title}E{episode}{extension}`.
//!
//! ```rust
//! use media_formatter::media_format::{CascadingMatcher, DirectoryListing, RenamePlan};
//!
//! let listing = DirectoryListing::from_names("/media", ["Show.S01E01.mkv", "Show.S01E02.mkv", "random.txt"]);
//! let matches = CascadingMatcher::default().find_matches(&listing, "Show").unwrap();
//! let plan = RenamePlan::build(&matches, "Show");
//! assert_eq!(plan.entries()[0].new_name(), Some("ShowE01.mkv"));
//! assert_eq!(plan.entries()[1].new_name(), Some("ShowE02.mkv"));
//! ```

mod episode;
mod error;
mod executor;
mod listing;
mod matcher;
mod plan;
mod preview;
mod tokenizer;

pub use episode::EpisodeTag;
pub use error::{FormatError, Result};
pub use executor::{ApplySummary, ExecutionOutcome, ExecutorState, PlanExecutor, RenameFailure, RenamedFile};
pub use listing::DirectoryListing;
pub use matcher::{CascadingMatcher, MatchSet};
pub use plan::{RenameAction, RenameEntry, RenamePlan, SkipReason};
pub use preview::{describe_entry, print_match_info, print_plan, print_summary};
pub use tokenizer::{DELIMITERS, Strategy, split_camel_case};

//! Rename plan construction.

use std::collections::HashMap;
use std::fmt;

use crate::media_format::{EpisodeTag, MatchSet};

/// Why a matched file will not be renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No episode number could be found in the file name.
    NoEpisodeNumber,
    /// Another entry in the plan already has or gets the same name.
    DuplicateTarget {
        /// The new name both entries would get.
        target: String,
        /// The file that keeps the new name.
        claimed_by: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEpisodeNumber => write!(f, "no episode number detected"),
            Self::DuplicateTarget { target, claimed_by } => {
                write!(f, "{target} is already the new name of {claimed_by}")
            }
        }
    }
}

/// What should happen to a single matched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameAction {
    Rename(String),
    Skip(SkipReason),
}

/// One matched file and its proposed new name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub original: String,
    pub episode: Option<EpisodeTag>,
    pub action: RenameAction,
}

impl RenameEntry {
    /// The proposed new name, or `None` for a skipped file.
    #[must_use]
    pub fn new_name(&self) -> Option<&str> {
        match &self.action {
            RenameAction::Rename(name) => Some(name),
            RenameAction::Skip(_) => None,
        }
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.action, RenameAction::Skip(_))
    }

    /// True when the file already has its target name.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.new_name() == Some(self.original.as_str())
    }
}

/// Ordered list of renames for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    base_title: String,
    entries: Vec<RenameEntry>,
}

impl RenamePlan {
    /// Build the plan for the matched files.
    ///
    /// Each file gets the name `{base_title}E{episode}{extension}`.
    /// Files without an episode number, and files whose new name was already
    /// claimed by another file, are kept in the plan as skipped entries.
    /// A file that already has its new name always keeps it.
    #[must_use]
    pub fn build(matches: &MatchSet, base_title: &str) -> Self {
        let proposed: Vec<(&String, Option<EpisodeTag>, Option<String>)> = matches
            .files()
            .iter()
            .map(|filename| {
                let episode = EpisodeTag::extract(filename);
                let target = episode
                    .as_ref()
                    .map(|tag| format!("{base_title}E{tag}{}", file_extension(filename)));
                (filename, episode, target)
            })
            .collect();

        let mut claimed: HashMap<String, String> = proposed
            .iter()
            .filter_map(|(filename, _, target)| match target {
                Some(target) if target == *filename => Some((target.clone(), (*filename).clone())),
                _ => None,
            })
            .collect();

        let entries = proposed
            .into_iter()
            .map(|(filename, episode, target)| {
                let action = match target {
                    None => RenameAction::Skip(SkipReason::NoEpisodeNumber),
                    Some(target) => match claimed.get(&target) {
                        Some(claimed_by) if claimed_by != filename => {
                            RenameAction::Skip(SkipReason::DuplicateTarget {
                                target,
                                claimed_by: claimed_by.clone(),
                            })
                        }
                        Some(_) => RenameAction::Rename(target),
                        None => {
                            claimed.insert(target.clone(), filename.clone());
                            RenameAction::Rename(target)
                        }
                    },
                };
                RenameEntry {
                    original: filename.clone(),
                    episode,
                    action,
                }
            })
            .collect();

        Self {
            base_title: base_title.to_string(),
            entries,
        }
    }

    #[must_use]
    pub fn base_title(&self) -> &str {
        &self.base_title
    }

    #[must_use]
    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    /// Number of entries that would change a file name.
    #[must_use]
    pub fn rename_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.is_skipped() && !entry.is_unchanged())
            .count()
    }

    #[must_use]
    pub fn skip_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_skipped()).count()
    }
}

/// File extension including the dot, or an empty string.
///
/// Dots at the start of the name do not start an extension: `.hidden` has none.
fn file_extension(filename: &str) -> &str {
    let stem_start = filename.len() - filename.trim_start_matches('.').len();
    filename[stem_start..]
        .rfind('.')
        .map_or("", |index| &filename[stem_start + index..])
}

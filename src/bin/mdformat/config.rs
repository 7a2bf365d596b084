use std::fs;

use anyhow::Context;
use serde::Deserialize;

use crate::Args;

/// Final config created from CLI arguments and user config file.
#[derive(Debug, Default)]
pub struct Config {
    pub(crate) dryrun: bool,
    pub(crate) force: bool,
    pub(crate) ignore_case: bool,
    pub(crate) log: bool,
    pub(crate) title: Option<String>,
    pub(crate) verbose: bool,
}

/// Config from a config file
#[derive(Debug, Default, Deserialize)]
struct FormatConfig {
    #[serde(default)]
    dryrun: bool,
    #[serde(default)]
    force: bool,
    #[serde(default)]
    ignore_case: bool,
    #[serde(default)]
    log: bool,
    #[serde(default)]
    verbose: bool,
}

/// Wrapper needed for parsing the config file section.
#[derive(Debug, Default, Deserialize)]
struct UserConfig {
    #[serde(default)]
    mdformat: FormatConfig,
}

impl FormatConfig {
    /// Try to read user config from the file if it exists.
    /// Otherwise, fall back to default config.
    ///
    /// # Errors
    /// Returns an error if config file exists but cannot be read or parsed.
    fn get_user_config() -> anyhow::Result<Self> {
        let Some(path) = media_formatter::config_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file {}:\n{e}", path.display())),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(anyhow::anyhow!(
                "Failed to read config file {}: {error}",
                path.display()
            )),
        }
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML string is invalid.
    fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str::<UserConfig>(toml_str)
            .map(|config| config.mdformat)
            .context("Failed to parse mdformat config TOML")
    }
}

impl Config {
    /// Create config from given command line args and user config file.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let user_config = FormatConfig::get_user_config()?;
        Ok(Self::combine(args, user_config))
    }

    fn combine(args: Args, user_config: FormatConfig) -> Self {
        let title = args.title.filter(|title| !title.trim().is_empty());
        Self {
            dryrun: args.print || user_config.dryrun,
            force: args.force || user_config.force,
            ignore_case: args.ignore_case || user_config.ignore_case,
            log: args.log || user_config.log,
            title,
            verbose: args.verbose || user_config.verbose,
        }
    }
}

#[cfg(test)]
mod format_config_tests {
    use super::*;

    #[test]
    fn from_toml_str_parses_empty_config() {
        let config = FormatConfig::from_toml_str("").unwrap();
        assert!(!config.dryrun);
        assert!(!config.force);
        assert!(!config.verbose);
    }

    #[test]
    fn from_toml_str_parses_mdformat_section() {
        let toml = r"
[mdformat]
dryrun = true
force = true
ignore_case = true
log = true
verbose = true
";
        let config = FormatConfig::from_toml_str(toml).unwrap();
        assert!(config.dryrun);
        assert!(config.force);
        assert!(config.ignore_case);
        assert!(config.log);
        assert!(config.verbose);
    }

    #[test]
    fn from_toml_str_invalid_toml_returns_error() {
        let result = FormatConfig::from_toml_str("this is not valid toml {{{");
        assert!(result.is_err());
    }

    #[test]
    fn from_toml_str_wrong_type_returns_error() {
        let toml = r#"
[mdformat]
force = "yes"
"#;
        assert!(FormatConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn from_toml_str_ignores_other_sections() {
        let toml = r"
[other_section]
some_value = true

[mdformat]
verbose = true
";
        let config = FormatConfig::from_toml_str(toml).unwrap();
        assert!(config.verbose);
        assert!(!config.force);
    }
}

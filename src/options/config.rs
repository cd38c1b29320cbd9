//! The config file and its defaults.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use indoc::indoc;
use serde::Deserialize;

use super::{OptionError, OptionResult};
use crate::records::{Classified, InputFormat, RuleSpec};

/// Where the config file lives, relative to the platform's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "keysort/ksort.toml";

/// The text written to a newly created config file.
pub const CONFIG_TEXT: &str = indoc! {r#"
    # This is a default config file for ksort. All of the settings are commented
    # out by default; if you wish to change them, uncomment and modify as you see
    # fit.

    # These options correspond to the command line flags of the same name.
    [general]
    # The format of the input and output, either "json" or "jsonl".
    #format = "json"
    # Whether to pretty-print JSON output.
    #pretty = false
    # Whether to use an unstable sort.
    #unstable = false

    # Named lists of sort rules, used with --profile. Earlier rules take
    # priority; later ones only break ties.
    [profiles]
    #by_weight = [".weight", ".color:desc"]
"#};

/// The config file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub general: Option<GeneralConfig>,
    pub profiles: Option<IndexMap<String, Vec<String>>>,
}

/// The `[general]` table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    pub format: Option<InputFormat>,
    pub pretty: Option<bool>,
    pub unstable: Option<bool>,
}

impl Config {
    /// Parses a config file's contents, checking every profile.
    pub fn parse(text: &str) -> OptionResult<Self> {
        let config: Config = toml_edit::de::from_str(text)?;

        if let Some(profiles) = &config.profiles {
            for name in profiles.keys() {
                config.profile(name)?;
            }
        }

        Ok(config)
    }

    /// Returns the names of all profiles, in file order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles
            .iter()
            .flat_map(|profiles| profiles.keys().map(String::as_str))
    }

    /// Returns the rules of the profile `name`.
    pub fn profile(&self, name: &str) -> OptionResult<Vec<RuleSpec>> {
        let Some(rules) = self.profiles.as_ref().and_then(|profiles| profiles.get(name)) else {
            return Err(OptionError::arg(format!(
                "'{name}' is not a profile in the config file."
            )));
        };

        if rules.is_empty() {
            return Err(OptionError::config(format!(
                "the profile '{name}' has no rules, it needs at least one sort rule."
            )));
        }

        rules
            .iter()
            .map(|rule| match RuleSpec::classify(rule) {
                Classified::Rule(spec) => Ok(spec),
                Classified::Sequence(_) => Err(OptionError::config(format!(
                    "'{rule}' in the profile '{name}' is not a valid sort rule."
                ))),
            })
            .collect()
    }
}

/// Returns the path of the config file. An explicit location always wins;
/// otherwise the platform's config directory is used, if there is one.
pub fn get_config_path(config_location: Option<&str>) -> Option<PathBuf> {
    if let Some(location) = config_location {
        Some(PathBuf::from(location))
    } else {
        dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION))
    }
}

/// Reads the config file at `config_path`. If the file doesn't exist, a default
/// one is written there and the default config is returned.
pub fn get_or_create_config(config_path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = config_path else {
        // Don't write, there was no config path to use.
        return Ok(Config::default());
    };

    if path.exists() {
        let config_string = fs::read_to_string(path)?;
        Config::parse(&config_string)
    } else {
        if let Some(parent_path) = path.parent() {
            fs::create_dir_all(parent_path)?;
        }

        fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
        Ok(Config::default())
    }
}

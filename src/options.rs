//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::path::PathBuf;

pub use error::{OptionError, OptionResult};

use self::{args::KsortArgs, config::Config};
use crate::{
    records::{Classified, InputFormat, RuleSpec},
    sort::{SortError, Stability},
};

/// Where records are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// The argument that stands for standard input.
    pub const STDIN_ARG: &'static str = "-";

    fn from_arg(arg: &str) -> Self {
        if arg == Self::STDIN_ARG {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        }
    }
}

/// Everything needed to run a sort, resolved from the arguments and the
/// config file.
#[derive(Clone, Debug)]
pub struct SortOptions {
    pub input: Input,
    pub rules: Vec<RuleSpec>,
    pub format: InputFormat,
    pub pretty: bool,
    pub stability: Stability,
}

/// Resolves the [`SortOptions`], with arguments taking priority over the
/// config file.
pub fn init_options(args: &KsortArgs, config: &Config) -> OptionResult<SortOptions> {
    let (input, rules) = get_input_and_rules(args)?;
    let rules = if rules.is_empty() {
        get_profile_rules(args, config)?
    } else {
        rules
    };

    Ok(SortOptions {
        input,
        rules,
        format: get_format(args, config)?,
        pretty: get_pretty(args, config),
        stability: get_stability(args, config),
    })
}

/// Classifies the positional arguments. If the first one is a sort rule, then
/// every argument is a rule and records come from stdin. Otherwise the first
/// one is the input, and the rest are rules.
fn get_input_and_rules(args: &KsortArgs) -> OptionResult<(Input, Vec<RuleSpec>)> {
    let Some(first) = &args.first else {
        return Ok((Input::Stdin, Vec::new()));
    };

    let (input, mut rules) = match RuleSpec::classify(first) {
        Classified::Rule(spec) => {
            crate::debug!("'{first}' is a rule, deferring the sort until stdin is read.");
            (Input::Stdin, vec![spec])
        }
        Classified::Sequence(arg) => {
            crate::debug!("'{first}' is the input, sorting it immediately.");
            (Input::from_arg(arg), Vec::new())
        }
    };

    for rule in &args.rules {
        rules.push(rule.parse()?);
    }

    Ok((input, rules))
}

fn get_profile_rules(args: &KsortArgs, config: &Config) -> OptionResult<Vec<RuleSpec>> {
    match &args.general_args.profile {
        Some(name) => config.profile(name),
        None => Err(OptionError::arg(format!(
            "{}, either as an argument or with '--profile'.",
            SortError::EmptyRuleList
        ))),
    }
}

fn get_format(args: &KsortArgs, config: &Config) -> OptionResult<InputFormat> {
    if let Some(format) = &args.output_args.format {
        return format.parse().map_err(OptionError::arg);
    } else if let Some(general) = &config.general {
        if let Some(format) = general.format {
            return Ok(format);
        }
    }

    Ok(InputFormat::default())
}

fn get_pretty(args: &KsortArgs, config: &Config) -> bool {
    if args.output_args.pretty {
        return true;
    } else if let Some(general) = &config.general {
        if let Some(pretty) = general.pretty {
            return pretty;
        }
    }

    false
}

fn get_stability(args: &KsortArgs, config: &Config) -> Stability {
    if args.output_args.unstable {
        return Stability::Unstable;
    } else if let Some(general) = &config.general {
        if let Some(true) = general.unstable {
            return Stability::Unstable;
        }
    }

    Stability::Stable
}

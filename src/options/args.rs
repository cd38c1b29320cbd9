//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "ksort [OPTIONS] [INPUT_OR_RULE] [RULES]...";

const VERSION: &str = match option_env!("NIGHTLY_VERSION") {
    Some(nightly_version) => nightly_version,
    None => crate_version!(),
};

/// The arguments for ksort.
#[derive(Parser, Debug)]
#[command(
    name = "ksort",
    version = VERSION,
    author = crate_authors!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct KsortArgs {
    #[arg(
        value_name = "INPUT_OR_RULE",
        help = "The file to sort, or the first sort rule.",
        long_help = "The file to sort, or the first sort rule. If this is a rule, such as '.weight' or \
                    '.color:desc', then all arguments are rules and records are read from stdin. \
                    Otherwise this is the path of the file to sort, where '-' is stdin."
    )]
    pub first: Option<String>,

    #[arg(
        value_name = "RULES",
        help = "Sort rules, in order of priority.",
        long_help = "Sort rules, in order of priority. A rule is a key path such as '.weight' or \
                    '.a.b.0', optionally followed by ':asc' or ':desc'. Later rules only break ties \
                    left by earlier ones."
    )]
    pub rules: Vec<String>,

    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub output_args: OutputArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

/// General arguments/config options.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        short = 'p',
        long,
        value_name = "NAME",
        help = "Uses the sort rules of a profile from the config file.",
        long_help = "Uses the sort rules of a profile from the config file's [profiles] table. \
                    Rules given on the command line take priority over the profile."
    )]
    pub profile: Option<String>,
}

/// Output arguments/config options.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options", rename_all = "snake_case")]
pub struct OutputArgs {
    #[arg(
        short = 'f',
        long,
        value_name = "FORMAT",
        value_parser = ["json", "jsonl"],
        help = "Sets the format of the input and output.",
        long_help = "Sets the format of the input and output. 'json' expects a single array of \
                    records, while 'jsonl' expects one record per line. Defaults to 'json'."
    )]
    pub format: Option<String>,

    #[arg(long, action = ArgAction::SetTrue, help = "Pretty-prints JSON output.")]
    pub pretty: bool,

    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "Uses an unstable sort.",
        long_help = "Uses an unstable sort, which may reorder records that tie on every rule."
    )]
    pub unstable: bool,
}

/// Other arguments. This just handles options that are for help/version
/// displaying.
#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options", rename_all = "snake_case")]
pub struct OtherArgs {
    #[cfg(feature = "logging")]
    #[arg(
        long,
        value_name = "PATH",
        help = "Writes a debug log to the given file."
    )]
    pub debug_log: Option<String>,

    #[arg(short='h', long, action=ArgAction::Help, help="Prints help info (for more details use '--help'.)")]
    help: (),

    #[arg(short='V', long, action=ArgAction::Version, help="Prints version information.")]
    version: (),
}

/// Returns a [`KsortArgs`].
pub fn get_args() -> KsortArgs {
    KsortArgs::parse()
}

/// Returns an [`Command`] based off of [`KsortArgs`].
#[cfg(test)]
fn build_cmd() -> Command {
    KsortArgs::command()
}

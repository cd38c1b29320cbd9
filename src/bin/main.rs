#![warn(rust_2018_idioms)]

use anyhow::{Context, Result};
use keysort::{
    debug, info,
    options::{args, config, init_options},
    run,
};

fn main() -> Result<()> {
    let args = args::get_args();

    #[cfg(feature = "logging")]
    {
        if let Some(debug_log) = &args.other_args.debug_log {
            keysort::utils::logging::init_logger(
                log::LevelFilter::Debug,
                std::ffi::OsStr::new(debug_log),
            )?;
        }
    }

    let config_path = config::get_config_path(args.general_args.config_location.as_deref());
    info!("Using the config file at {config_path:?}.");

    let config = config::get_or_create_config(config_path.as_deref())
        .context("Unable to properly parse or create the config file.")?;

    let options = init_options(&args, &config)
        .context("Found an issue while trying to resolve the sort rules.")?;
    debug!("Resolved options: {options:?}");

    run(&options)
}

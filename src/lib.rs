//! Multi-key sorting, eagerly or curried.
//!
//! See [`sort`] for the sorting API itself, and [`records`] for sorting JSON
//! records by textual rules like `.weight` or `.color:desc`, which is what the
//! `ksort` binary does.

#![warn(rust_2018_idioms)]

pub mod utils {
    pub(crate) mod general;
    pub mod logging;
}
pub mod options;
pub mod records;
pub mod sort;

use std::{
    fs,
    io::{self, BufReader},
};

use anyhow::Context;
pub use sort::{
    dispatch, identity, sort_by, sort_by_rules, sort_by_strict, Comparable, Dispatched, RuleList,
    SortArg, SortBy, SortError, SortOrder, SortRule, SortedByExt, Stability,
};

use crate::{
    options::{Input, SortOptions},
    records::{read_records, sort_records, write_records},
};

/// Reads, sorts, and writes records as described by `options`, writing the
/// result to stdout.
pub fn run(options: &SortOptions) -> anyhow::Result<()> {
    let mut records = match &options.input {
        Input::Stdin => read_records(io::stdin().lock(), options.format)
            .context("Unable to read records from stdin.")?,
        Input::File(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("Unable to open the input file {path:?}."))?;
            read_records(BufReader::new(file), options.format)
                .with_context(|| format!("Unable to read records from {path:?}."))?
        }
    };
    info!("Read {} records.", records.len());

    sort_records(&mut records, &options.rules, options.stability)
        .context("Unable to sort the records.")?;
    debug!("Sorted with {:?} stability.", options.stability);

    write_records(io::stdout().lock(), &records, options.format, options.pretty)
        .context("Unable to write the sorted records.")?;

    Ok(())
}

//! General build script used by ksort to generate completion files and a manpage.

#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

const COMPLETION_DIR: &str = "./target/tmp/keysort/completion/";
const MANPAGE_DIR: &str = "./target/tmp/keysort/manpage/";

const ENV_KEY: &str = "KSORT_GENERATE";

fn create_dir(dir: &Path) -> io::Result<()> {
    let res = fs::create_dir_all(dir);
    match &res {
        Ok(()) => {}
        Err(err) => {
            eprintln!(
                "Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting..."
            );
        }
    }

    res
}

fn generate_completions() -> io::Result<()> {
    match env::var_os(ENV_KEY) {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            // Generate completions
            let mut app = args::KsortArgs::command();
            generate_to(Shell::Bash, &mut app, "ksort", &completion_out_dir)?;
            generate_to(Shell::Zsh, &mut app, "ksort", &completion_out_dir)?;
            generate_to(Shell::Fish, &mut app, "ksort", &completion_out_dir)?;
            generate_to(Shell::PowerShell, &mut app, "ksort", &completion_out_dir)?;
            generate_to(Shell::Elvish, &mut app, "ksort", &completion_out_dir)?;

            // Generate manpage
            let app = app.name("ksort");
            let man = Man::new(app);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("ksort.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed={ENV_KEY}");

    Ok(())
}

fn main() -> io::Result<()> {
    generate_completions()
}

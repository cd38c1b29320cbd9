use std::{collections::HashMap, env, ffi::OsString, path::Path, process::Command};

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns a QEMU runner target given an architecture.
fn get_qemu_target(arch: &str) -> &str {
    match arch {
        "armv7" => "arm",
        "i686" => "i386",
        "powerpc" => "ppc",
        "powerpc64le" => "ppc64le",
        _ => arch,
    }
}

/// Running binary tests via cross needs the right runner, which can be found
/// by inspecting env variables that only show up while using cross.
fn cross_runner() -> Option<String> {
    const TARGET_RUNNER: &str = "CARGO_TARGET_RUNNER";
    const CROSS_RUNNER: &str = "CROSS_RUNNER";

    let env_mapping = env::vars_os()
        .filter_map(|(k, v)| {
            let (k, v) = (k.to_string_lossy(), v.to_string_lossy());

            if k.starts_with("CARGO_TARGET_") && k.ends_with("_RUNNER") && !v.is_empty() {
                Some((TARGET_RUNNER.to_string(), v.to_string()))
            } else if k == CROSS_RUNNER && !v.is_empty() {
                Some((k.to_string(), v.to_string()))
            } else {
                None
            }
        })
        .collect::<HashMap<_, _>>();

    if let Some(cross_runner) = env_mapping.get(CROSS_RUNNER) {
        if cross_runner == "qemu-user" {
            env_mapping.get(TARGET_RUNNER).map(|target_runner| {
                format!(
                    "qemu-{}",
                    get_qemu_target(target_runner.split_ascii_whitespace().last().unwrap())
                )
            })
        } else {
            None
        }
    } else {
        env_mapping.get(TARGET_RUNNER).cloned()
    }
}

const KSORT_EXE_PATH: &str = env!("CARGO_BIN_EXE_ksort");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

/// Returns the [`Command`] of a binary invocation of ksort, run from the
/// package root so that relative input paths reach ksort as written.
pub fn ksort_command(args: &[&str]) -> Command {
    let mut cmd = match cross_runner() {
        None => Command::new(KSORT_EXE_PATH),
        Some(runner) => {
            let mut cmd = Command::new(runner);
            cmd.arg(KSORT_EXE_PATH);
            cmd
        }
    };

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" {
            // This is a file; make sure we set it to absolute path!
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

/// Returns the [`Command`] of a binary invocation of ksort with the default,
/// empty config file, followed by `args`.
pub fn no_cfg_ksort_command(args: &[&str]) -> Command {
    let mut all_args = DEFAULT_CFG.to_vec();
    all_args.extend_from_slice(args);

    ksort_command(&all_args)
}

/// Returns the value of `key` in each record of ksort's JSON output.
pub fn output_keys(stdout: &[u8], key: &str) -> Vec<String> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(stdout).unwrap();
    records
        .iter()
        .map(|record| match &record[key] {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

/// Returns the value of `key` in each record of ksort's JSON lines output.
pub fn output_line_keys(stdout: &[u8], key: &str) -> Vec<String> {
    let records = std::str::from_utf8(stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .collect::<Vec<_>>();

    records
        .iter()
        .map(|record| match &record[key] {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

#![forbid(unsafe_code)]

//! Headless Omnioktagram driver.
//!
//! # Running
//!
//! ```sh
//! # Print the summary of a spell code as JSON.
//! cargo run -p okta-harness -- decode 81234567
//!
//! # Replay a JSON-lines script from stdin; one JSON line out per event.
//! cargo run -p okta-harness -- replay < script.jsonl
//! ```
//!
//! See [`okta_harness::settings`] for the environment variables.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use okta::SessionController;
use okta_harness::script::{self, Script};
use okta_harness::settings::{HarnessSettings, env_flag};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: okta-harness decode CODE | okta-harness replay < script.jsonl";

fn init_tracing() {
    let filter = EnvFilter::try_from_env("OKTA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    let _ = if env_flag("OKTA_LOG_JSON").unwrap_or(false) {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn decode(code: &str, settings: HarnessSettings) -> okta::Result<()> {
    let mut ctl = SessionController::new(settings.size, settings.config)?;
    ctl.load_code(code)?;
    let summary = ctl.summary();
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &summary)?;
    writeln!(out)?;
    Ok(())
}

fn replay(settings: HarnessSettings) -> okta::Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let script = Script::from_jsonl(&input)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    tracing::info!(records = script.records.len(), "replaying script");

    let report = script::replay(&script, settings.size, settings.config)?;
    io::stdout().lock().write_all(report.to_jsonl().as_bytes())?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match HarnessSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("okta-harness: {err}");
            return ExitCode::from(2);
        }
    };

    let result = match args.as_slice() {
        [cmd, code] if cmd == "decode" => decode(code, settings),
        [cmd] if cmd == "replay" => replay(settings),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("okta-harness: {err}");
            ExitCode::FAILURE
        }
    }
}

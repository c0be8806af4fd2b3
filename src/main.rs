// SPDX-License-Identifier: MIT
//
// nightnote — a small line-oriented text editor in the spirit of ed.
//
// This is the main binary. It wires the editor core to the process:
//
//   nn-editor → buffer store, command parsing, interpreter
//
// Startup:
//
//   RUST_LOG          → tracing filter (logs go to stderr, default `warn`)
//   NIGHTNOTE_CONFIG  → optional TOML file overriding the capacity limits
//
// Then the interpreter owns locked stdin/stdout until `q` or end of input:
//
//   stdin → LineReader → command::parse → BufferStore → report → stdout

use std::env;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nn_editor::config::Config;
use nn_editor::info::CONFIG_ENV;
use nn_editor::interpreter::Interpreter;
use nn_editor::store::BufferStore;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config() -> anyhow::Result<Config> {
    let Some(path) = env::var_os(CONFIG_ENV).map(PathBuf::from) else {
        debug!("no {CONFIG_ENV}, using default limits");
        return Ok(Config::default());
    };
    let config = Config::load(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    info!(path = %path.display(), limits = ?config.limits, "config loaded");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = load_config()?;

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let store = BufferStore::try_new(config.limits).context("invalid limits")?;
    let mut interp = Interpreter::new(store, stdin, stdout);
    interp.run().context("terminal I/O failed")?;

    Ok(())
}

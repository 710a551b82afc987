//! `aula`: command-line front end for the Aula academic records store.
//!
//! # Usage
//!
//! ```text
//! aula --data-dir ./datos student add --first-name Ana --last-name Lopez \
//!      --email ana@uni.edu.pe --major Contabilidad
//! aula course add MAT101 --name "Calculo I" --instructor "J. Perez" --credits 4
//! aula enroll add 2024001 MAT101
//! aula grade set 2024001 MAT101 12.5 14 16
//! aula --json dashboard
//! ```
//!
//! Settings come from `aula.toml` (or `--config`), then `AULA_*` environment
//! variables, then `--data-dir`.

mod cli;
mod output;
mod run;

use std::{path::Path, process::ExitCode};

use anyhow::Context as _;
use aula_api::Registry;
use aula_store_text::{StoreConfig, TextStore};
use clap::Parser;
use cli::Cli;
use output::Output;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let store_cfg = load_config(&cli.config, cli.data_dir.as_deref())?;
  let store = TextStore::open(&store_cfg).with_context(|| {
    format!("failed to open data files in {}", store_cfg.data_dir.display())
  })?;

  let registry = Registry::new(store);
  run::execute(&registry, cli.command, Output { json: cli.json })
}

/// Layer the optional config file, `AULA_*` environment variables and the
/// `--data-dir` flag, in increasing precedence.
fn load_config(path: &Path, data_dir: Option<&Path>) -> anyhow::Result<StoreConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("AULA"))
    .set_override_option("data_dir", data_dir.map(|d| d.to_string_lossy().into_owned()))
    .context("invalid --data-dir")?
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise StoreConfig")
}

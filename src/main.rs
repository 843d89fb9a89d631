// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `iced_gallery=trace`).
const LOG_ENV: &str = "ICED_GALLERY_LOG";

const HELP: &str = "\
iced_gallery - browse a media catalog

USAGE:
  iced_gallery [OPTIONS] [CATALOG]

ARGS:
  <CATALOG>               TOML catalog file to open

OPTIONS:
  --lang <TAG>            Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  -h, --help              Print this help
";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn parse_args() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let catalog_path = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    Ok(Flags {
        lang,
        catalog_path,
        config_dir,
    })
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_args() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting iced_gallery");

    app::run(flags)
}

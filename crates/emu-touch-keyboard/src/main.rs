//! Command-line front end for checking skin tables.
//!
//! Resolves image coordinates against a skin the same way the touch
//! handler does, so a table can be checked against its artwork without
//! running the emulator.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emu_touch_keyboard::skin::{BUILTIN_SKINS, parse_skins};
use emu_touch_keyboard::{ConfigError, Key, KeySymbols, Point, Registry};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Additional skin table (JSON) to load next to the built-in skins
    #[arg(long, value_name = "FILE", global = true)]
    skins: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available skins
    List,
    /// Resolve an image pixel coordinate to a key
    Hit {
        /// Skin name, e.g. "C64 Keyboard"
        skin: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
}

#[derive(Serialize)]
struct HitReport<'a> {
    skin: &'a str,
    x: f64,
    y: f64,
    key: Option<Key>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<&'a KeySymbols>,
    #[serde(skip_serializing_if = "Option::is_none")]
    toggle_image: Option<&'a str>,
}

fn load_registry(extra: Option<&PathBuf>) -> Result<Registry, ConfigError> {
    let mut definitions = parse_skins(BUILTIN_SKINS)?;
    if let Some(path) = extra {
        let json = std::fs::read_to_string(path)?;
        let extra = parse_skins(&json)?;
        info!(path = %path.display(), skins = extra.len(), "loaded skin table");
        definitions.extend(extra);
    }
    Registry::from_definitions(definitions)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = match load_registry(cli.skins.as_ref()) {
        Ok(registry) => registry,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    match cli.command {
        Command::List => {
            for name in registry.names() {
                println!("{name}");
            }
        }
        Command::Hit { skin, x, y } => {
            let Some(keyboard) = registry.get(&skin) else {
                error!(skin = %skin, "unknown skin");
                process::exit(1);
            };
            let key = keyboard.hit(Point::new(x, y));
            let report = HitReport {
                skin: keyboard.name(),
                x,
                y,
                key,
                symbol: key.and_then(|k| keyboard.symbol(k)),
                toggle_image: key.and_then(|k| keyboard.toggle_image(k)),
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!("cannot encode result: {e}");
                    process::exit(1);
                }
            }
        }
    }
}

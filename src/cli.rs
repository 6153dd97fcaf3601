//! CLI interface for flightlog.
//!
//! Each subcommand reads the game's log directory and prints what it finds.
//! Lookups print plain text or JSON and exit; `watch` and `bridge` run until
//! interrupted.

mod format;

use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use flightlog::{
    bridge::{Bridge, SerialLink},
    config::Config,
    logdir::LogDir,
    model::StatusFlags,
    watch,
};

use format::{describe_port, format_flags, parse_word};

/// flightlog: read what Elite Dangerous writes to disk.
#[derive(Debug, Parser)]
#[command(name = "flightlog", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Log directory. Defaults to `FLIGHTLOG_LOG_DIR`, then the config file,
    /// then the game's standard location.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Config file (default `~/.flightlog/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    command: Command,
}

const USAGE_HELP: &str = r"Examples:
  flightlog location
  flightlog flags 553713677
  flightlog --log-dir ./journals watch
  flightlog bridge --port /dev/ttyACM0 --baud-rate 115200";

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current status snapshot as JSON.
    Status,

    /// List the flags set in a raw status word.
    Flags {
        /// Decimal or `0x`-prefixed hex.
        #[arg(value_parser = parse_word)]
        word: u32,

        /// Show every flag, set or not.
        #[arg(long)]
        all: bool,
    },

    /// Print the latest star system.
    System,

    /// Print the station the player is docked at, if any.
    Station,

    /// Print system and station together.
    Location,

    /// Print the latest loadout as JSON.
    Loadout,

    /// Print the latest statistics as JSON.
    Statistics,

    /// Print the location each time it changes, until Ctrl-C.
    Watch,

    /// Send telemetry records to a serial controller, until Ctrl-C.
    Bridge {
        /// Serial device (overrides `[bridge] port`).
        #[arg(long)]
        port: Option<String>,

        /// Baud rate (overrides `[bridge] baud-rate`).
        #[arg(long)]
        baud_rate: Option<u32>,
    },

    /// List available serial ports.
    Ports,
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli) -> Result<(), String> {
    // Needs no log directory or config.
    match cli.command {
        Command::Flags { word, all } => {
            let out = format_flags(StatusFlags::decode(word), all);
            if !out.is_empty() {
                println!("{out}");
            }
            return Ok(());
        }
        Command::Ports => return cmd_ports(),
        _ => {}
    }

    let config = Config::load(cli.config.as_deref())?;
    let root = config.resolve_log_dir(cli.log_dir.as_deref())?;
    let dir = config.log_dir(root);

    match cli.command {
        Command::Status => print_json(&dir.status().map_err(|e| e.to_string())?),
        Command::System => {
            let system = dir.latest_star_system().map_err(|e| e.to_string())?;
            println!("{system}");
            Ok(())
        }
        Command::Station => {
            let station = dir.latest_station().map_err(|e| e.to_string())?;
            if station.is_empty() {
                eprintln!("Not docked");
            } else {
                println!("{station}");
            }
            Ok(())
        }
        Command::Location => {
            let location = dir.location().map_err(|e| e.to_string())?;
            println!("{location}");
            Ok(())
        }
        Command::Loadout => print_json(&dir.latest_loadout().map_err(|e| e.to_string())?),
        Command::Statistics => print_json(&dir.latest_statistics().map_err(|e| e.to_string())?),
        Command::Watch => cmd_watch(dir),
        Command::Bridge { port, baud_rate } => cmd_bridge(&config, dir, port, baud_rate),
        Command::Flags { .. } | Command::Ports => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize: {e}"))?;
    println!("{json}");
    Ok(())
}

fn cmd_ports() -> Result<(), String> {
    let ports =
        serialport::available_ports().map_err(|e| format!("failed to list serial ports: {e}"))?;

    if ports.is_empty() {
        println!("No serial ports");
        return Ok(());
    }
    for port in &ports {
        println!("{}", describe_port(port));
    }
    Ok(())
}

fn cmd_watch(dir: LogDir) -> Result<(), String> {
    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        let _ = tx.send(());
    })
    .map_err(|e| format!("failed to install Ctrl-C handler: {e}"))?;

    eprintln!("Watching {} (Ctrl-C to stop)", dir.root().display());
    let handle = watch::watch(dir, |location| println!("{location}"))
        .map_err(|e| format!("failed to watch log directory: {e}"))?;

    // Returns on Ctrl-C; an error means the handler is gone, so stop too.
    let _ = rx.recv();
    handle.stop();
    Ok(())
}

fn cmd_bridge(
    config: &Config,
    dir: LogDir,
    port: Option<String>,
    baud_rate: Option<u32>,
) -> Result<(), String> {
    let settings = &config.bridge;
    let port = port.or_else(|| settings.port.clone()).ok_or(
        "no serial port: pass --port or set `port` under [bridge] in the config file \
         (see `flightlog ports`)",
    )?;
    let baud_rate = baud_rate.unwrap_or(settings.baud_rate);

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("failed to install Ctrl-C handler: {e}"))?;

    eprintln!("Bridging to {port} at {baud_rate} baud (Ctrl-C to stop)");
    Bridge::new(dir, SerialLink::new(port, baud_rate))
        .with_max_consecutive_errors(settings.max_consecutive_errors)
        .run(settings.poll_interval(), &running)
        .map_err(|e| format!("bridge stopped: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["flightlog", "location", "--log-dir", "/games/ed", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_dir, Some(PathBuf::from("/games/ed")));
        assert!(matches!(cli.command, Command::Location));
    }

    #[test]
    fn flags_accepts_hex() {
        let cli = Cli::try_parse_from(["flightlog", "flags", "0x10"]).unwrap();
        assert!(matches!(cli.command, Command::Flags { word: 16, all: false }));
    }

    #[test]
    fn bridge_overrides() {
        let cli = Cli::try_parse_from([
            "flightlog",
            "bridge",
            "--port",
            "COM3",
            "--baud-rate",
            "115200",
        ])
        .unwrap();
        match cli.command {
            Command::Bridge { port, baud_rate } => {
                assert_eq!(port.as_deref(), Some("COM3"));
                assert_eq!(baud_rate, Some(115_200));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

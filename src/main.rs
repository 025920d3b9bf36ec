//! Contract Multitool CLI
//!
//! Batch driver for test scripts that share a pass/fail record file:
//! - `reset` starts a new batch by appending a counter reset marker
//! - `summary` replays the record and reports the totals since the last reset
//! - `report` prints (and optionally records) a named report
//! - `address` reads or writes a deployed contract address file
//!
//! Typical batch:
//!   multitool reset
//!   for i in scripts/*TEST.*; do run "$i"; done
//!   multitool summary

use clap::{ArgAction, Parser, Subcommand};
use contract_multitool::{
    config, read_contract_address_or_empty, write_contract_address, Color, ColorMode,
    MultitoolError, Palette, RunCounters, TestLedger,
};
use std::path::PathBuf;
use tracing::{error, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for the multitool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pass/fail record file shared by the scripts of a batch
    #[arg(long, global = true, default_value = config::DEFAULT_RECORD_FILE)]
    record_file: PathBuf,

    /// When to color console output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Increase output verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append a counter reset marker to the record file
    Reset,

    /// Report the totals recorded since the last reset marker
    Summary {
        /// Print the totals as JSON after the report
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print a named testing report
    Report {
        /// Test name used in the banner and the appended summary line
        #[arg(default_value = config::DEFAULT_TEST_NAME)]
        name: String,

        /// Replay the record file before reporting
        #[arg(long, default_value_t = false)]
        read: bool,

        /// Do not append the reported counters to the record file
        #[arg(long, default_value_t = false)]
        no_write: bool,

        /// Print the totals as JSON after the report
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Read or write a deployed contract address file
    Address {
        #[command(subcommand)]
        action: AddressAction,
    },
}

#[derive(Subcommand, Debug)]
enum AddressAction {
    /// Print the stored address (empty if the file cannot be read)
    Get { file: PathBuf },
    /// Store an address
    Set { file: PathBuf, address: String },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MultitoolError> {
    let palette = Palette::from_mode(cli.color);
    let mut ledger = TestLedger::new(&cli.record_file).with_color_mode(cli.color);

    match cli.command {
        Command::Reset => {
            let _span = info_span!("reset").entered();
            banner(&palette, "--> resetting test accounting  <--");
            ledger.append_reset_marker()?;
        }
        Command::Summary { json } => {
            let _span = info_span!("summary").entered();
            banner(&palette, "--> test run results  <--");
            let totals = ledger.report(config::SUMMARY_TEST_NAME, true, false)?;
            print_json(json, &totals)?;
        }
        Command::Report {
            name,
            read,
            no_write,
            json,
        } => {
            let _span = info_span!("report", %name).entered();
            let totals = ledger.report(&name, read, !no_write)?;
            print_json(json, &totals)?;
        }
        Command::Address { action } => {
            let _span = info_span!("address").entered();
            match action {
                AddressAction::Get { file } => {
                    println!("{}", read_contract_address_or_empty(&file));
                }
                AddressAction::Set { file, address } => {
                    write_contract_address(&file, &address)?;
                }
            }
        }
    }
    Ok(())
}

fn banner(palette: &Palette, title: &str) {
    palette.amberlog("============================================");
    palette.bluelog(format!("{}{}", palette.code(Color::BgGreen), title));
    palette.amberlog("============================================");
}

fn print_json(enabled: bool, totals: &RunCounters) -> Result<(), MultitoolError> {
    if enabled {
        let json = serde_json::to_string_pretty(totals).map_err(|e| {
            MultitoolError::Serialization(format!("Failed to serialize totals: {}", e))
        })?;
        println!("{}", json);
    }
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn,contract_multitool=info",
        1 => "info,contract_multitool=debug",
        _ => "debug,contract_multitool=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    use tracing_tree::HierarchicalLayer;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(false)
                .with_bracketed_fields(true),
        )
        .init();
}

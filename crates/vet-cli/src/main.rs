//! The `vet` binary: an interactive menu of divination tools and esoteric
//! calculators.

mod console;
mod menu;

use std::io;
use std::process;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use vet_core::ToolkitConfig;

use console::Console;

#[derive(Parser)]
#[command(
    name = "vet",
    about = "The Virtual Esoteric Toolkit: tarot, runes, coins, dice, I-Ching, charts, numerology",
    version
)]
struct Cli {
    /// Seed every random draw for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log to stderr; repeat for more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<(), String> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())
}

fn run(cli: Cli) -> Result<(), String> {
    init_logging(cli.verbose)?;
    let mut config = ToolkitConfig::default().with_color(!cli.no_color);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    tracing::info!(seed = ?config.seed, color = config.color, "starting toolkit");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.color);
    menu::run(&mut console, &config).map_err(|e| e.to_string())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

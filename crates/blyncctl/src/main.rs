//! blyncctl CLI — control the Embrava Blynclight USB LED indicator.

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

mod cli;

/// Shared shutdown flag — cleared by the Ctrl+C handler.
pub static RUNNING: AtomicBool = AtomicBool::new(true);

#[derive(Parser)]
#[command(
    name = "blyncctl",
    version,
    about = "Control the Embrava Blynclight USB LED indicator"
)]
struct Args {
    /// Output as JSON (for devices, status, config)
    #[arg(long, global = true)]
    json: bool,

    /// Print decoded reports instead of writing to hardware
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    ctrlc::set_handler(move || {
        RUNNING.store(false, Ordering::SeqCst);
    })
    .ok();

    if let Err(e) = cli::run(args.command, args.json, args.dry_run) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! Stagecraft CLI - Drive the showcase scenes headlessly

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, scenes, tour};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stagecraft")]
#[command(about = "Scene lifecycle and particle showcase, simulated headlessly", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v, -vv). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable scenes in menu order
    Scenes,

    /// Run one scene for a number of frames
    Run {
        /// Scene id (see `stagecraft scenes`)
        scene: String,

        /// Frames to simulate
        #[arg(long, default_value = "300")]
        frames: u64,

        /// Simulated frame rate
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Pace frames against the wall clock instead of simulating time
        #[arg(long)]
        realtime: bool,

        #[command(flatten)]
        session: run::SessionArgs,
    },

    /// Visit every scene in menu order, like pressing each button in turn
    Tour {
        /// Frames to simulate per scene
        #[arg(long, default_value = "120")]
        frames_per_scene: u64,

        /// Simulated frame rate
        #[arg(long, default_value = "60")]
        fps: f64,

        #[command(flatten)]
        session: run::SessionArgs,
    },
}

/// Filter used when RUST_LOG is unset
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scenes => scenes::run(),
        Commands::Run {
            scene,
            frames,
            fps,
            realtime,
            session,
        } => run::run(run::RunArgs {
            scene,
            frames,
            fps,
            realtime,
            session,
        }),
        Commands::Tour {
            frames_per_scene,
            fps,
            session,
        } => tour::run(tour::TourArgs {
            frames_per_scene,
            fps,
            session,
        }),
    }
}

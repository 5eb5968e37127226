use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

use roster::{app, logging, Prompt, RosterConfig, Session, TerminalPrompt};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Track people's weight, pay and insurance from an interactive menu"
)]
struct Cli {
    /// JSON config with starting values and insurance plans
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Plain, uncolored output
    #[arg(long)]
    no_color: bool,

    /// Debug logging to stderr (RUST_LOG still wins)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("❌ {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => RosterConfig::from_file(path)?,
        None => RosterConfig::default(),
    };
    info!(plans = config.plans.len(), "config loaded");

    let mut session = Session::with_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let color = config.color_enabled(cli.no_color);
    let mut prompt = TerminalPrompt::new(stdin.lock(), stdout.lock(), color);

    prompt.say(&format!("👥 Payroll Roster v{}", roster::VERSION))?;
    app::run(&mut session, &mut prompt)?;
    prompt.say("👋 Goodbye!")?;

    Ok(())
}

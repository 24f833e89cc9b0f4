use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crc_init::console::Console;
use crc_init::core::config::InitConfig;
use crc_init::exit_codes;
use crc_init::init::run_init;
use crc_init::logging;

#[derive(Parser)]
#[command(
    name = "crc-init",
    version,
    about = "Initialize CRC modeling (specs/, design/, CLAUDE.md) in a project"
)]
struct Cli {
    /// Project root to initialize. Defaults to the current directory.
    #[arg(long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_codes::IO_FAILURE);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let mut console = Console::stdout(!cli.no_color);
    run_init(&root, &InitConfig::crc(), &mut console)?;
    Ok(())
}

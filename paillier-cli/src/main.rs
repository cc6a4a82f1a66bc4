mod cli;
mod commands;

use clap::Parser;

use crate::cli::PaillierCli;

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = PaillierCli::parse();
    let output = commands::run(cli.cmd)?;
    println!("{}", output);

    Ok(())
}

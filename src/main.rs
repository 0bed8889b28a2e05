mod cli;
mod commands;
mod config;
mod error;
mod imports;
mod install;
mod output;
mod pm;
mod process;
mod project;
mod registry;
mod resolve;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

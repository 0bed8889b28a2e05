use crate::cli::{Cli, Command};

pub mod add;
pub mod list;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Add(args) => add::run(args).await,
        Command::List(args) => list::run(args).await,
    }
}

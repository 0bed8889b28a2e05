use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{add, list};

#[derive(Debug, Parser)]
#[command(name = "dedevs-ui")]
#[command(version, disable_version_flag = true)]
#[command(about = "DeDevs UI CLI - Add components from the DeDevs UI Design Registry", long_about = None)]
pub struct Cli {
    /// Show version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// レジストリからコンポーネントを追加
    Add(add::Args),

    /// 利用可能なコンポーネント一覧
    #[command(alias = "ls")]
    List(list::Args),
}

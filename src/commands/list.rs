//! list コマンド
//!
//! レジストリの全コンポーネントをカテゴリ別に表示する。
//! ネットワーク障害時は組み込みの静的インデックスにフォールバックし、
//! どちらの場合も正常終了する。

use crate::config::{HttpConfig, RegistryConfig};
use crate::registry::{RegistryClient, RegistryIndex};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only component names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    if !args.json && !args.simple {
        println!("Fetching available components...");
    }

    let client = RegistryClient::new(&HttpConfig::default(), RegistryConfig::default());
    let index = match client.fetch_index().await {
        Ok(index) => index,
        Err(_) => {
            // フォールバックしても終了コードは0
            if !args.json && !args.simple {
                println!("Using local registry data...");
            }
            RegistryIndex::fallback()
        }
    };

    if args.json {
        print_json(&index)?;
    } else if args.simple {
        print_simple(&index);
    } else {
        print_grouped(&index);
    }

    Ok(())
}

fn print_json(index: &RegistryIndex) -> Result<(), String> {
    serde_json::to_string_pretty(&index.items)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize registry index: {}", e))
}

fn print_simple(index: &RegistryIndex) {
    for item in &index.items {
        println!("{}", item.name);
    }
}

fn print_grouped(index: &RegistryIndex) {
    println!();
    println!("Available components:");
    println!();

    for (category, items) in index.grouped() {
        println!("{}:", category.heading());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Name", "Description"]);

        for item in items {
            table.add_row(vec![
                item.name.as_str(),
                item.description.as_deref().unwrap_or("No description available"),
            ]);
        }

        println!("{table}");
        println!();
    }

    println!("Total: {} components available", index.items.len());
    println!();
    println!("Usage: dedevs-ui add <component-name>");
}

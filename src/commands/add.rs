//! add コマンド
//!
//! 要求されたコンポーネントごとに解決→インストールを実行する。
//! 推移的依存の失敗は警告のみ。直接要求されたコンポーネントの失敗が
//! 1つでもあれば終了コードは非0になる。

use crate::config::{HttpConfig, RegistryConfig};
use crate::error::Result;
use crate::install::{InstallReport, Installer};
use crate::output;
use crate::pm::PackageManagerKind;
use crate::process::SystemRunner;
use crate::project::ProjectContext;
use crate::registry::RegistryClient;
use crate::resolve::Resolver;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// 追加するコンポーネント名（複数指定可）
    #[arg(required = true, num_args = 1..)]
    pub components: Vec<String>,
}

pub async fn run(args: Args) -> std::result::Result<(), String> {
    let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
    let project = ProjectContext::new(cwd);
    let registry = RegistryConfig::default();
    let client = RegistryClient::new(&HttpConfig::default(), registry.clone());
    let manager = PackageManagerKind::detect(project.root());
    let runner = SystemRunner;

    let mut failed_roots = Vec::new();

    for name in normalize_requests(&args.components) {
        println!("Adding {} component...", name);

        match add_component(&client, &project, &runner, manager, &registry, &name).await {
            Ok(report) => print_report(&report),
            Err(err) => {
                output::warn(&format!("Failed to add {}: {}", name, err));
                failed_roots.push(name);
            }
        }
    }

    if failed_roots.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Failed to install: {}",
            failed_roots.join(", ")
        ))
    }
}

async fn add_component(
    client: &RegistryClient,
    project: &ProjectContext,
    runner: &SystemRunner,
    manager: PackageManagerKind,
    registry: &RegistryConfig,
    name: &str,
) -> Result<InstallReport> {
    let state = Resolver::new(client).resolve(name).await?;
    Installer::new(project, runner, manager, registry.clone()).install(&state)
}

fn print_report(report: &InstallReport) {
    let summary = report.summary();
    println!("{} {}", summary.prefix, summary.message);

    for skipped in &report.skipped {
        println!("  skipped {}: {}", skipped.name, skipped.reason);
    }
    if report.has_failures() {
        for failure in &report.failed {
            println!("  failed {}: {}", failure.name, failure.reason);
        }
        for failure in &report.primitives_failed {
            println!("  failed ui primitive {}: {}", failure.name, failure.reason);
        }
    }
    if !report.manual_deps.is_empty() {
        println!("  install manually: {}", report.manual_deps.join(", "));
    }
}

/// 空白だけの指定を除去し、前後の空白を落とす
fn normalize_requests(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

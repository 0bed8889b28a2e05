//! インストールオーケストレータ（フェーズA〜F）
//!
//! 解決済み状態を受け取り、以下の固定順で副作用を実行する。
//!
//! - A: 不足npm依存を1回の起動でまとめてインストール（非致命）
//! - B: ルートコンポーネントのスキャフォールド（致命）
//! - C: 生成ファイル名の正規化（非致命）
//! - D: インポートパスの書き換え（非致命）
//! - E: 不足UIプリミティブの個別インストール（プリミティブ単位で非致命）
//! - F: 残りの解決済みコンポーネントをBFS順に B〜D 相当で処理（非致命）

use crate::config::RegistryConfig;
use crate::error::{DedevsError, Result};
use crate::install::rename;
use crate::install::report::{Failure, InstallReport};
use crate::install::rewrite;
use crate::output;
use crate::pm::PackageManagerKind;
use crate::process::ProcessRunner;
use crate::project::ProjectContext;
use crate::resolve::{ResolutionState, ResolutionWarning, ResolvedComponent};
use std::collections::BTreeSet;

/// インストール実行器
pub struct Installer<'a, R: ProcessRunner> {
    project: &'a ProjectContext,
    runner: &'a R,
    manager: PackageManagerKind,
    registry: RegistryConfig,
}

impl<'a, R: ProcessRunner> Installer<'a, R> {
    pub fn new(
        project: &'a ProjectContext,
        runner: &'a R,
        manager: PackageManagerKind,
        registry: RegistryConfig,
    ) -> Self {
        Self {
            project,
            runner,
            manager,
            registry,
        }
    }

    /// 解決済み状態をインストールする
    ///
    /// ルートのスキャフォールド失敗だけが `Err`。それ以外の失敗は
    /// 警告を表示してレポートに記録し、処理を続行する。
    pub fn install(&self, state: &ResolutionState) -> Result<InstallReport> {
        let mut report = InstallReport::default();

        // 解決時の警告を引き継ぐ
        for warning in &state.warnings {
            output::warn(&warning.to_string());
            if let ResolutionWarning::FetchFailed { name, reason } = warning {
                report.skipped.push(Failure::new(name, reason));
            }
        }

        let Some(root) = state.root() else {
            return Ok(report);
        };

        // Phase A: npm依存
        self.install_npm_deps(&state.npm_deps, &mut report);

        // Phase B: ルートのスキャフォールド（致命）
        self.scaffold_component(&root.name, false)?;

        // Phase C / D
        self.finalize_component_files(root);

        // Phase E: UIプリミティブ
        self.install_missing_primitives(&state.ui_primitives, &mut report);

        report.installed.push(root.name.clone());

        // Phase F: 残りのコンポーネント依存
        for component in state.components.iter().skip(1) {
            self.install_dependency_component(component, &mut report);
        }

        Ok(report)
    }

    /// Phase A: 宣言されていないnpm依存をまとめてインストール
    fn install_npm_deps(&self, npm_deps: &BTreeSet<String>, report: &mut InstallReport) {
        if npm_deps.is_empty() {
            return;
        }

        let declared = match self.project.declared_dependencies() {
            Ok(Some(declared)) => declared,
            Ok(None) => {
                output::warn("No package.json found. Skipping dependency check.");
                return;
            }
            Err(err) => {
                output::warn(&format!("Could not read package.json: {}", err));
                return;
            }
        };

        let missing: Vec<String> = npm_deps
            .iter()
            .filter(|dep| !declared.contains(dep.as_str()))
            .cloned()
            .collect();
        if missing.is_empty() {
            return;
        }

        println!("📦 Installing missing dependencies: {}", missing.join(", "));

        let mut args = vec![self.manager.install_verb().to_string()];
        args.extend(missing.iter().cloned());

        let succeeded = self
            .runner
            .run(self.manager.as_str(), &args, self.project.root(), false)
            .map(|out| out.success)
            .unwrap_or(false);

        if succeeded {
            println!("✅ Dependencies installed successfully");
        } else {
            let err = DedevsError::DependencyInstall(format!(
                "{} exited with non-zero status",
                self.manager.as_str()
            ));
            output::warn(&format!(
                "{}. Please install them manually: {}",
                err,
                missing.join(", ")
            ));
            report.manual_deps = missing;
        }
    }

    /// スキャフォールドツールでコンポーネントを追加
    fn scaffold_component(&self, name: &str, quiet: bool) -> Result<()> {
        let url = self.registry.component_url(name);
        let args = vec![
            "shadcn@latest".to_string(),
            "add".to_string(),
            url,
        ];

        let output = self
            .runner
            .run("npx", &args, self.project.root(), quiet)?;
        if !output.success {
            return Err(DedevsError::ScaffoldInstall {
                name: name.to_string(),
                message: if output.stderr.trim().is_empty() {
                    "scaffold command exited with non-zero status".to_string()
                } else {
                    output.stderr.trim().to_string()
                },
            });
        }
        Ok(())
    }

    /// Phase C + D: ファイル名正規化とインポート書き換え
    fn finalize_component_files(&self, component: &ResolvedComponent) {
        for warning in rename::canonicalize(self.project, &component.name, &component.manifest) {
            output::warn(&warning.to_string());
        }

        let (_, warnings) = rewrite::rewrite_project_imports(self.project);
        for warning in warnings {
            output::warn(&warning.to_string());
        }
    }

    /// Phase E: ディスクに無いUIプリミティブを個別にインストール
    fn install_missing_primitives(
        &self,
        primitives: &BTreeSet<String>,
        report: &mut InstallReport,
    ) {
        let missing: Vec<&String> = primitives
            .iter()
            .filter(|name| !self.project.has_ui_primitive(name))
            .collect();
        if missing.is_empty() {
            return;
        }

        println!(
            "🧩 Installing missing shadcn/ui components: {}",
            missing
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        for name in missing {
            // 直前のインストールが書いた可能性があるので再チェック
            if self.project.has_ui_primitive(name) {
                continue;
            }

            println!("  Installing {}...", name);
            let args = vec![
                "shadcn@latest".to_string(),
                "add".to_string(),
                name.clone(),
            ];
            let succeeded = self
                .runner
                .run("npx", &args, self.project.root(), true)
                .map(|out| out.success)
                .unwrap_or(false);

            if succeeded {
                println!("  ✅ {} installed", name);
            } else {
                output::warn(&format!(
                    "Could not install {}. Please install it manually: npx shadcn@latest add {}",
                    name, name
                ));
                report
                    .primitives_failed
                    .push(Failure::new(name, "scaffold command failed"));
            }
        }
    }

    /// Phase F: 依存コンポーネント1件を処理（非致命）
    fn install_dependency_component(
        &self,
        component: &ResolvedComponent,
        report: &mut InstallReport,
    ) {
        if self.project.has_component(&component.name) {
            println!("  ✅ {} already exists", component.name);
            report
                .skipped
                .push(Failure::new(&component.name, "already exists"));
            return;
        }

        println!("  Installing {}...", component.name);
        match self.scaffold_component(&component.name, true) {
            Ok(()) => {
                self.finalize_component_files(component);
                println!("  ✅ {} installed", component.name);
                report.installed.push(component.name.clone());
            }
            Err(err) => {
                output::warn(&format!(
                    "Could not install component dependency {}: {}",
                    component.name, err
                ));
                report
                    .failed
                    .push(Failure::new(&component.name, err.to_string()));
            }
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

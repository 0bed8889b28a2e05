use crate::error::{DedevsError, Result};
use crate::imports::{extract_imports, ClassifiedDeps, Classifier};
use crate::registry::ManifestSource;
use crate::resolve::state::{ResolutionState, ResolutionWarning, ResolvedComponent};
use std::collections::VecDeque;

/// 依存解決エンジン
///
/// 明示的なワークリスト + visited 集合で走査する。循環・ダイヤモンド依存が
/// あっても、キューから取り出すたびに visited を確認するので必ず停止する。
pub struct Resolver<'a, S: ManifestSource> {
    source: &'a S,
    classifier: Classifier,
}

impl<'a, S: ManifestSource> Resolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            classifier: Classifier::default(),
        }
    }

    /// 分類器を差し替える（ワークスペーススコープ追加用）
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// ルートコンポーネントから推移的依存集合を構築
    ///
    /// ルートの取得失敗は致命（Err）。推移的依存の取得失敗は
    /// 警告として記録し、兄弟依存の解決は続行する。
    pub async fn resolve(&self, root: &str) -> Result<ResolutionState> {
        let root = root.trim();
        if root.is_empty() {
            return Err(DedevsError::InvalidComponentName(root.to_string()));
        }

        let mut state = ResolutionState::default();
        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(root.to_string());

        while let Some(name) = queue.pop_front() {
            if state.visited.contains(&name) {
                continue;
            }

            let manifest = match self.source.manifest(&name).await {
                Ok(manifest) => manifest,
                Err(err) if name == root => return Err(err),
                Err(err) => {
                    // 失敗した名前も visited に入れて再取得を防ぐ
                    state.visited.insert(name.clone());
                    state.warnings.push(ResolutionWarning::FetchFailed {
                        name,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };
            state.visited.insert(name.clone());

            let mut deps = ClassifiedDeps::default();
            for content in manifest.file_contents() {
                let refs = extract_imports(content);
                self.classifier.absorb(&refs, &mut deps);
            }

            for specifier in &deps.unknown_aliases {
                state.warnings.push(ResolutionWarning::UnknownAlias {
                    component: name.clone(),
                    specifier: specifier.clone(),
                });
            }

            state.npm_deps.extend(deps.npm_deps.iter().cloned());
            state.ui_primitives.extend(deps.ui_primitives.iter().cloned());

            for dep in &deps.component_deps {
                if !state.visited.contains(dep) {
                    queue.push_back(dep.clone());
                }
            }

            state.components.push(ResolvedComponent {
                name,
                manifest,
                deps,
            });
        }

        Ok(state)
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;

use super::*;
use crate::registry::{ComponentFile, ComponentManifest};
use std::collections::HashMap;

/// マップベースのテスト用マニフェストソース
struct MapSource {
    manifests: HashMap<String, ComponentManifest>,
}

impl MapSource {
    fn new(entries: &[(&str, &str)]) -> Self {
        let manifests = entries
            .iter()
            .map(|(name, content)| ((*name).to_string(), manifest(name, content)))
            .collect();
        Self { manifests }
    }
}

impl ManifestSource for MapSource {
    async fn manifest(&self, name: &str) -> Result<ComponentManifest> {
        self.manifests
            .get(name)
            .cloned()
            .ok_or_else(|| DedevsError::RegistryFetch {
                name: name.to_string(),
                status: 404,
                message: "Not Found".to_string(),
            })
    }
}

fn manifest(name: &str, content: &str) -> ComponentManifest {
    ComponentManifest {
        name: name.to_string(),
        manifest_type: Some("registry:ui".to_string()),
        files: vec![ComponentFile {
            path: format!("packages/{}/index.tsx", name),
            file_type: Some("registry:ui".to_string()),
            content: Some(content.to_string()),
        }],
    }
}

fn names(state: &ResolutionState) -> Vec<&str> {
    state.components.iter().map(|c| c.name.as_str()).collect()
}

// === シナリオ ===

#[tokio::test]
async fn test_resolve_snippet_scenario() {
    let source = MapSource::new(&[(
        "snippet",
        r#"
import { Button } from '@/components/ui/button';
import { z } from 'zod';
import { Code2Icon } from 'lucide-react';
"#,
    )]);

    let state = Resolver::new(&source).resolve("snippet").await.unwrap();

    assert_eq!(
        state.npm_deps.iter().collect::<Vec<_>>(),
        vec!["lucide-react", "zod"]
    );
    assert_eq!(
        state.ui_primitives.iter().collect::<Vec<_>>(),
        vec!["button"]
    );
    assert_eq!(names(&state), vec!["snippet"]);
    assert!(state.warnings.is_empty());
}

#[tokio::test]
async fn test_resolve_code_tree_scenario() {
    let source = MapSource::new(&[
        ("code-tree", "import { Tree } from '@repo/code/tree';"),
        ("tree", "import { z } from 'zod';"),
    ]);

    let state = Resolver::new(&source).resolve("code-tree").await.unwrap();

    // tree が再帰的に解決され、その依存もマージされる
    assert_eq!(names(&state), vec!["code-tree", "tree"]);
    assert!(state.visited.contains("tree"));
    assert_eq!(state.npm_deps.iter().collect::<Vec<_>>(), vec!["zod"]);
}

// === 停止性 ===

#[tokio::test]
async fn test_resolve_cycle_terminates() {
    // A → B → A の循環でも停止し、各コンポーネントは一度だけ処理される
    let source = MapSource::new(&[
        ("a", "import { B } from '@repo/code/b';"),
        ("b", "import { A } from '@repo/code/a';"),
    ]);

    let state = Resolver::new(&source).resolve("a").await.unwrap();

    assert_eq!(state.visited.len(), 2);
    assert_eq!(names(&state), vec!["a", "b"]);
}

#[tokio::test]
async fn test_resolve_self_reference_terminates() {
    let source = MapSource::new(&[("a", "import { A } from '@repo/code/a';")]);

    let state = Resolver::new(&source).resolve("a").await.unwrap();
    assert_eq!(names(&state), vec!["a"]);
}

// === ダイヤモンド依存の重複排除 ===

#[tokio::test]
async fn test_diamond_deps_deduplicated() {
    let shared = r#"
import { z } from 'zod';
import { Card } from '@/components/ui/card';
"#;
    let source = MapSource::new(&[
        (
            "root",
            "import { L } from '@repo/code/left';\nimport { R } from '@repo/code/right';",
        ),
        ("left", shared),
        ("right", shared),
    ]);

    let state = Resolver::new(&source).resolve("root").await.unwrap();

    // zod と card はそれぞれ一度だけ
    assert_eq!(state.npm_deps.iter().collect::<Vec<_>>(), vec!["zod"]);
    assert_eq!(state.ui_primitives.iter().collect::<Vec<_>>(), vec!["card"]);
    assert_eq!(state.visited.len(), 3);
    assert_eq!(names(&state), vec!["root", "left", "right"]);
}

// === 失敗ポリシー ===

#[tokio::test]
async fn test_resolve_root_fetch_failure_is_fatal() {
    let source = MapSource::new(&[]);

    let err = Resolver::new(&source).resolve("missing").await.unwrap_err();
    assert!(matches!(err, DedevsError::RegistryFetch { status: 404, .. }));
}

#[tokio::test]
async fn test_transitive_fetch_failure_is_warning() {
    let source = MapSource::new(&[(
        "root",
        "import { Ghost } from '@repo/code/ghost';\nimport { z } from 'zod';",
    )]);

    let state = Resolver::new(&source).resolve("root").await.unwrap();

    // ルートは解決済み、ghost は警告つきスキップ
    assert_eq!(names(&state), vec!["root"]);
    assert!(state.visited.contains("ghost"));
    assert_eq!(state.warnings.len(), 1);
    assert!(matches!(
        &state.warnings[0],
        ResolutionWarning::FetchFailed { name, .. } if name == "ghost"
    ));
    // 兄弟依存は失われない
    assert_eq!(state.npm_deps.iter().collect::<Vec<_>>(), vec!["zod"]);
}

#[tokio::test]
async fn test_failed_dependency_not_refetched() {
    // 同じ失敗依存を2コンポーネントが参照しても取得は一度だけ
    let source = MapSource::new(&[
        (
            "root",
            "import { A } from '@repo/code/left';\nimport { B } from '@repo/code/right';",
        ),
        ("left", "import { G } from '@repo/code/ghost';"),
        ("right", "import { G } from '@repo/code/ghost';"),
    ]);

    let state = Resolver::new(&source).resolve("root").await.unwrap();
    let ghost_warnings = state
        .warnings
        .iter()
        .filter(|w| matches!(w, ResolutionWarning::FetchFailed { name, .. } if name == "ghost"))
        .count();
    assert_eq!(ghost_warnings, 1);
}

// === 入力検証と警告 ===

#[tokio::test]
async fn test_resolve_empty_name_is_invalid() {
    let source = MapSource::new(&[]);

    let err = Resolver::new(&source).resolve("  ").await.unwrap_err();
    assert!(matches!(err, DedevsError::InvalidComponentName(_)));
}

#[tokio::test]
async fn test_unknown_alias_reported_once() {
    let source = MapSource::new(&[("root", "import { track } from '@repo/analytics';")]);

    let state = Resolver::new(&source).resolve("root").await.unwrap();
    assert_eq!(state.warnings.len(), 1);
    assert!(matches!(
        &state.warnings[0],
        ResolutionWarning::UnknownAlias { specifier, .. } if specifier == "@repo/analytics"
    ));
}

#[tokio::test]
async fn test_manifest_without_files_resolves_empty() {
    let mut source = MapSource::new(&[]);
    source.manifests.insert(
        "bare".to_string(),
        ComponentManifest {
            name: "bare".to_string(),
            manifest_type: None,
            files: vec![],
        },
    );

    let state = Resolver::new(&source).resolve("bare").await.unwrap();
    assert_eq!(names(&state), vec!["bare"]);
    assert!(state.npm_deps.is_empty());
    assert!(state.ui_primitives.is_empty());
}

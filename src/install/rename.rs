//! 生成ファイル名の正規化（フェーズC）
//!
//! スキャフォールドツールはマニフェスト内パスの最終セグメントを
//! ファイル名として書き出す。これを要求されたコンポーネント名
//! `<component>.tsx` に揃える。内容はバイト単位で保存される。

use crate::error::DedevsError;
use crate::project::ProjectContext;
use crate::registry::ComponentManifest;
use std::fs;

/// マニフェストの各ファイルをコンポーネント名に揃える
///
/// 既に正しい名前なら何もしない（冪等）。失敗は `FileOperation` として
/// 返し、ファイルは元の名前のまま残す。
pub fn canonicalize(
    project: &ProjectContext,
    component: &str,
    manifest: &ComponentManifest,
) -> Vec<DedevsError> {
    let mut warnings = Vec::new();
    let dir = project.ui_dir();
    let expected = format!("{}.tsx", component);

    for file in &manifest.files {
        let original = file.basename();
        if original == expected {
            continue;
        }

        let source = dir.join(original);
        let target = dir.join(&expected);

        if source.exists() {
            // 読み込み → 新名で書き込み → 元を削除（内容保存）
            let result = fs::read(&source)
                .and_then(|bytes| fs::write(&target, bytes))
                .and_then(|_| fs::remove_file(&source));
            match result {
                Ok(()) => {
                    println!("✨ Renamed {} to {}", original, expected);
                }
                Err(err) => {
                    warnings.push(DedevsError::FileOperation {
                        path: source.clone(),
                        message: format!(
                            "could not rename {} to {}: {}",
                            original, expected, err
                        ),
                    });
                }
            }
        } else if !target.exists() {
            warnings.push(DedevsError::FileOperation {
                path: dir.clone(),
                message: format!("neither {} nor {} found", original, expected),
            });
        }
    }

    warnings
}

#[cfg(test)]
#[path = "rename_test.rs"]
mod tests;

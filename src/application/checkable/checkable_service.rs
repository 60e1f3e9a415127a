use crate::domain::{Checkable, CheckableType, Isbn};
use crate::ports::{CheckableRepository, InsertOutcome};
use std::sync::Arc;

use super::errors::{CheckableApplicationError, Result};

/// 貸出対象物サービスの依存関係
///
/// 振る舞いは持たず、依存を明示的に渡すためのデータ構造。
/// 外部への依存はリポジトリのみ。
#[derive(Clone)]
pub struct CheckableDependencies {
    pub checkable_repository: Arc<dyn CheckableRepository>,
}

/// すべての貸出対象物を取得する
///
/// ストアが返した順序をそのまま返す。
pub async fn get_all(deps: &CheckableDependencies) -> Result<Vec<Checkable>> {
    deps.checkable_repository
        .find_all()
        .await
        .map_err(CheckableApplicationError::RepositoryError)
}

/// ISBNで貸出対象物を取得する
///
/// 完全一致のみ。正規化は行わない。
///
/// # エラー
/// - CheckableNotFound: 一致する貸出対象物がない
pub async fn get_by_isbn(deps: &CheckableDependencies, isbn: &Isbn) -> Result<Checkable> {
    tracing::debug!(%isbn, "looking up checkable by isbn");

    deps.checkable_repository
        .find_by_isbn(isbn)
        .await
        .map_err(CheckableApplicationError::RepositoryError)?
        .ok_or_else(|| CheckableApplicationError::CheckableNotFound(isbn.clone()))
}

/// 種別で貸出対象物を1件取得する
///
/// 「その種別が少なくとも1件ある」ことだけを保証する。どの1件かはストア次第。
///
/// # エラー
/// - CheckableTypeNotFound: その種別の貸出対象物がない
pub async fn get_by_type(
    deps: &CheckableDependencies,
    checkable_type: CheckableType,
) -> Result<Checkable> {
    tracing::debug!(%checkable_type, "looking up checkable by type");

    deps.checkable_repository
        .find_by_type(checkable_type)
        .await
        .map_err(CheckableApplicationError::RepositoryError)?
        .ok_or(CheckableApplicationError::CheckableTypeNotFound(
            checkable_type,
        ))
}

/// 貸出対象物を保存する
///
/// ビジネスルール：
/// - ISBNはシステム全体で一意
///
/// 既存の全件を走査して重複を確認した後、リポジトリの原子的な追加を呼ぶ。
/// 走査と追加の間に別の呼び出しが同じISBNを追加した場合も、
/// リポジトリの結果により重複として拒否される。
///
/// # エラー
/// - CheckableAlreadyExists: 同じISBNが既に存在する（書き込みは行われない）
pub async fn save(deps: &CheckableDependencies, checkable: Checkable) -> Result<()> {
    let isbn = checkable.isbn().clone();

    // 1. 既存の全件を走査
    let existing = get_all(deps).await?;
    if existing.iter().any(|c| c.isbn() == &isbn) {
        tracing::warn!(%isbn, "rejected checkable with duplicate isbn");
        return Err(CheckableApplicationError::CheckableAlreadyExists(isbn));
    }

    // 2. 原子的に追加
    let outcome = deps
        .checkable_repository
        .insert(checkable)
        .await
        .map_err(CheckableApplicationError::RepositoryError)?;

    match outcome {
        InsertOutcome::Inserted => {
            tracing::info!(%isbn, "checkable saved");
            Ok(())
        }
        InsertOutcome::AlreadyExists => {
            tracing::warn!(%isbn, "checkable with same isbn was inserted concurrently");
            Err(CheckableApplicationError::CheckableAlreadyExists(isbn))
        }
    }
}

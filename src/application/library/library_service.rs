use crate::application::checkable::{self, CheckableDependencies};
use crate::domain::{
    self, CheckableAmount, Isbn, Library, LibraryAvailableCheckouts, LibraryName, OverdueCheckout,
};
use crate::ports::{InsertOutcome, LibraryRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};

/// 図書館サービスの依存関係
///
/// ISBNの解決は貸出対象物サービスに委ねる。
#[derive(Clone)]
pub struct LibraryDependencies {
    pub library_repository: Arc<dyn LibraryRepository>,
    pub checkable_service: CheckableDependencies,
}

/// 照会の前提となる図書館を取得するヘルパー関数
///
/// get_checkable_amount, get_overdue_checkoutsで共通利用される。
/// 図書館が存在しない場合は前提条件違反として扱う。
async fn require_library(deps: &LibraryDependencies, name: &LibraryName) -> Result<Library> {
    let library = deps
        .library_repository
        .find_by_name(name)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?;

    library.ok_or_else(|| {
        tracing::warn!(library = %name, "query requires an existing library");
        LibraryApplicationError::LibraryPreconditionViolated(name.clone())
    })
}

/// すべての図書館を取得する
pub async fn get_libraries(deps: &LibraryDependencies) -> Result<Vec<Library>> {
    deps.library_repository
        .find_all()
        .await
        .map_err(LibraryApplicationError::RepositoryError)
}

/// 名前で図書館を取得する
///
/// # エラー
/// - LibraryNotFound: 一致する図書館がない
pub async fn get_library_by_name(
    deps: &LibraryDependencies,
    name: &LibraryName,
) -> Result<Library> {
    tracing::debug!(library = %name, "looking up library by name");

    deps.library_repository
        .find_by_name(name)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?
        .ok_or_else(|| LibraryApplicationError::LibraryNotFound(name.clone()))
}

/// 図書館を保存する
///
/// ビジネスルール：
/// - 図書館名はシステム全体で一意
///
/// # エラー
/// - LibraryAlreadyExists: 同じ名前の図書館が既に存在する（書き込みは行われない）
pub async fn save(deps: &LibraryDependencies, library: Library) -> Result<()> {
    let name = library.name().clone();

    // 1. 既存の全件を走査
    let existing = get_libraries(deps).await?;
    if existing.iter().any(|l| l.name() == &name) {
        tracing::warn!(library = %name, "rejected library with duplicate name");
        return Err(LibraryApplicationError::LibraryAlreadyExists(name));
    }

    // 2. 原子的に追加
    let outcome = deps
        .library_repository
        .insert(library)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?;

    match outcome {
        InsertOutcome::Inserted => {
            tracing::info!(library = %name, "library saved");
            Ok(())
        }
        InsertOutcome::AlreadyExists => {
            tracing::warn!(library = %name, "library with same name was inserted concurrently");
            Err(LibraryApplicationError::LibraryAlreadyExists(name))
        }
    }
}

/// 図書館における貸出対象物の在庫数を取得する
///
/// 在庫エントリがない場合はエラーではなく在庫0のエントリを返す。
///
/// # エラー
/// - Checkable(CheckableNotFound): ISBNが解決できない
/// - LibraryPreconditionViolated: 図書館が存在しない
pub async fn get_checkable_amount(
    deps: &LibraryDependencies,
    library_name: &LibraryName,
    isbn: &Isbn,
) -> Result<CheckableAmount> {
    // 1. ISBNの解決（NotFoundはそのまま伝播）
    let checkable = checkable::get_by_isbn(&deps.checkable_service, isbn).await?;

    // 2. 図書館の取得
    let library = require_library(deps, library_name).await?;

    // 3. 在庫エントリの線形探索
    let amount = library
        .checkable_amount_of(&checkable)
        .cloned()
        .unwrap_or_else(|| CheckableAmount::none(checkable));

    Ok(amount)
}

/// 貸出対象物の在庫を持つ図書館の一覧を取得する
///
/// 在庫エントリを持たない図書館は結果に含まれない。
///
/// # エラー
/// - Checkable(CheckableNotFound): ISBNが解決できない
pub async fn get_libraries_with_available_checkout(
    deps: &LibraryDependencies,
    isbn: &Isbn,
) -> Result<Vec<LibraryAvailableCheckouts>> {
    let checkable = checkable::get_by_isbn(&deps.checkable_service, isbn).await?;
    let libraries = get_libraries(deps).await?;

    Ok(domain::library::available_checkouts(&libraries, &checkable))
}

/// 図書館の延滞中の貸出を取得する
///
/// 現在時刻は呼び出しごとに1回だけ取得し、全ての判定で同じ値を使う。
pub async fn get_overdue_checkouts(
    deps: &LibraryDependencies,
    library_name: &LibraryName,
) -> Result<Vec<OverdueCheckout>> {
    get_overdue_checkouts_at(deps, library_name, Utc::now()).await
}

/// 指定時刻を基準に図書館の延滞中の貸出を取得する
///
/// 返却期限が`now`より厳密に前の貸出のみ延滞とする。
///
/// # エラー
/// - LibraryPreconditionViolated: 図書館が存在しない
pub async fn get_overdue_checkouts_at(
    deps: &LibraryDependencies,
    library_name: &LibraryName,
    now: DateTime<Utc>,
) -> Result<Vec<OverdueCheckout>> {
    let library = require_library(deps, library_name).await?;

    let overdue = domain::library::overdue_checkouts(&library, now);
    tracing::debug!(library = %library_name, count = overdue.len(), "overdue checkouts found");

    Ok(overdue)
}

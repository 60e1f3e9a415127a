use crate::domain::{Library, LibraryName};
use async_trait::async_trait;

use super::InsertOutcome;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 図書館リポジトリポート
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// すべての図書館を取得する（ストアの順序）
    async fn find_all(&self) -> Result<Vec<Library>>;

    /// 名前の完全一致で取得する
    async fn find_by_name(&self, name: &LibraryName) -> Result<Option<Library>>;

    /// 図書館を追加する
    ///
    /// 名前の一意性は実装側で原子的に強制する（例: 一意制約）。
    async fn insert(&self, library: Library) -> Result<InsertOutcome>;
}

use crate::domain::{Checkable, CheckableType, Isbn};
use async_trait::async_trait;

use super::InsertOutcome;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出対象物リポジトリポート
///
/// 貸出対象物の永続化と検索を抽象化する。
/// 保存先の技術やスキーマはこのポートの外側の関心事。
#[async_trait]
pub trait CheckableRepository: Send + Sync {
    /// すべての貸出対象物を取得する（ストアの順序）
    async fn find_all(&self) -> Result<Vec<Checkable>>;

    /// ISBNの完全一致で取得する
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Checkable>>;

    /// 指定種別の貸出対象物を1件取得する
    ///
    /// どの1件を返すかは実装に委ねる。
    async fn find_by_type(&self, checkable_type: CheckableType) -> Result<Option<Checkable>>;

    /// 貸出対象物を追加する
    ///
    /// ISBNの一意性は実装側で原子的に強制する。
    /// 既に同じISBNが存在する場合は書き込まずに`InsertOutcome::AlreadyExists`を返す。
    async fn insert(&self, checkable: Checkable) -> Result<InsertOutcome>;
}

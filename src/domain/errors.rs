use thiserror::Error;

use super::Isbn;

/// 図書館集約の構築エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// 同じ貸出対象物の在庫エントリが既に存在する
    ///
    /// 不変条件：(図書館, 貸出対象物) ごとに在庫エントリは高々1つ
    #[error("Checkable amount for isbn {0} already exists in this library")]
    DuplicateCheckableAmount(Isbn),
}

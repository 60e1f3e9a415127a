use crate::domain::{CheckableType, Isbn};
use thiserror::Error;

/// 貸出対象物アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CheckableApplicationError {
    /// ISBNに一致する貸出対象物が存在しない
    #[error("Checkable with isbn {0} not found")]
    CheckableNotFound(Isbn),

    /// 指定種別の貸出対象物が1件も存在しない
    #[error("No checkable of type {0} found")]
    CheckableTypeNotFound(CheckableType),

    /// 同じISBNの貸出対象物が既に存在する
    #[error("Checkable with isbn {0} already exists")]
    CheckableAlreadyExists(Isbn),

    /// リポジトリのエラー
    #[error("Checkable repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CheckableApplicationError>;

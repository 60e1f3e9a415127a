use crate::application::checkable::CheckableApplicationError;
use crate::domain::LibraryName;
use thiserror::Error;

/// 図書館アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LibraryApplicationError {
    /// 名前に一致する図書館が存在しない
    #[error("No library found by the name {0}")]
    LibraryNotFound(LibraryName),

    /// 同じ名前の図書館が既に存在する
    #[error("Library with name {0} already exists")]
    LibraryAlreadyExists(LibraryName),

    /// 図書館が存在することを前提とする照会で、図書館が存在しなかった
    ///
    /// 呼び出し側の前提条件違反。`LibraryNotFound`とは区別する。
    #[error("Library {0} must exist for this query")]
    LibraryPreconditionViolated(LibraryName),

    /// 貸出対象物サービスのエラー（そのまま伝播）
    #[error(transparent)]
    Checkable(#[from] CheckableApplicationError),

    /// リポジトリのエラー
    #[error("Library repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryApplicationError>;

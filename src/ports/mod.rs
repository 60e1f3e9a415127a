pub mod checkable_repository;
pub mod library_repository;

pub use checkable_repository::CheckableRepository;
pub use library_repository::LibraryRepository;

/// 追加操作の結果
///
/// 一意性チェックと書き込みをリポジトリ内で1つの操作として行い、
/// その結果を呼び出し側に返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// 追加された
    Inserted,
    /// 同じ識別子が既に存在したため追加しなかった
    AlreadyExists,
}

use crate::domain::{Checkable, CheckableType, Isbn};
use crate::ports::InsertOutcome;
use crate::ports::checkable_repository::{CheckableRepository as CheckableRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// CheckableRepositoryのインメモリ実装
///
/// 追加順を保持する。ISBNの重複チェックと追加は同じロックの中で行う。
pub struct CheckableRepository {
    checkables: Mutex<Vec<Checkable>>,
}

impl CheckableRepository {
    pub fn new() -> Self {
        Self {
            checkables: Mutex::new(Vec::new()),
        }
    }

    /// 初期データ付きで作成する（一意性チェックは行わない）
    pub fn with_checkables(checkables: Vec<Checkable>) -> Self {
        Self {
            checkables: Mutex::new(checkables),
        }
    }
}

impl Default for CheckableRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckableRepositoryTrait for CheckableRepository {
    async fn find_all(&self) -> Result<Vec<Checkable>> {
        let checkables = self.checkables.lock().map_err(|e| e.to_string())?;
        Ok(checkables.clone())
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Checkable>> {
        let checkables = self.checkables.lock().map_err(|e| e.to_string())?;
        Ok(checkables.iter().find(|c| c.isbn() == isbn).cloned())
    }

    /// 追加順で最初に一致したものを返す
    async fn find_by_type(&self, checkable_type: CheckableType) -> Result<Option<Checkable>> {
        let checkables = self.checkables.lock().map_err(|e| e.to_string())?;
        Ok(checkables
            .iter()
            .find(|c| c.is_type(checkable_type))
            .cloned())
    }

    async fn insert(&self, checkable: Checkable) -> Result<InsertOutcome> {
        let mut checkables = self.checkables.lock().map_err(|e| e.to_string())?;
        if checkables.iter().any(|c| c.isbn() == checkable.isbn()) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        checkables.push(checkable);
        Ok(InsertOutcome::Inserted)
    }
}

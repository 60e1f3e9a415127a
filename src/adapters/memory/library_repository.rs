use crate::domain::{Library, LibraryName};
use crate::ports::InsertOutcome;
use crate::ports::library_repository::{LibraryRepository as LibraryRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// LibraryRepositoryのインメモリ実装
///
/// 追加順を保持する。名前の重複チェックと追加は同じロックの中で行う。
pub struct LibraryRepository {
    libraries: Mutex<Vec<Library>>,
}

impl LibraryRepository {
    pub fn new() -> Self {
        Self {
            libraries: Mutex::new(Vec::new()),
        }
    }

    /// 初期データ付きで作成する（一意性チェックは行わない）
    pub fn with_libraries(libraries: Vec<Library>) -> Self {
        Self {
            libraries: Mutex::new(libraries),
        }
    }
}

impl Default for LibraryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryRepositoryTrait for LibraryRepository {
    async fn find_all(&self) -> Result<Vec<Library>> {
        let libraries = self.libraries.lock().map_err(|e| e.to_string())?;
        Ok(libraries.clone())
    }

    async fn find_by_name(&self, name: &LibraryName) -> Result<Option<Library>> {
        let libraries = self.libraries.lock().map_err(|e| e.to_string())?;
        Ok(libraries.iter().find(|l| l.name() == name).cloned())
    }

    async fn insert(&self, library: Library) -> Result<InsertOutcome> {
        let mut libraries = self.libraries.lock().map_err(|e| e.to_string())?;
        if libraries.iter().any(|l| l.name() == library.name()) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        libraries.push(library);
        Ok(InsertOutcome::Inserted)
    }
}

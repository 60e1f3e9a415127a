use crate::application::checkable::{self, CheckableApplicationError, CheckableDependencies};
use crate::application::library::{self, LibraryApplicationError, LibraryDependencies};
use crate::domain::{Checkable, Library};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 初期データ読み込みのエラー
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Checkable(#[from] CheckableApplicationError),

    #[error(transparent)]
    Library(#[from] LibraryApplicationError),
}

/// 初期データ（JSON）
///
/// ```json
/// {
///   "checkables": [{ "type": "ticket", "isbn": "3-0", "title": "Science Museum Tickets" }],
///   "libraries": [{ "name": "Eastside", "checkables": [], "library_cards": [] }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub checkables: Vec<Checkable>,
    #[serde(default)]
    pub libraries: Vec<Library>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// サービスの保存操作を通して初期データを投入する
    ///
    /// 一意性のルールは通常の保存と同じく適用される。
    /// 最初の失敗で中断し、それまでに投入したデータは残る。
    pub async fn apply(
        self,
        checkable_deps: &CheckableDependencies,
        library_deps: &LibraryDependencies,
    ) -> Result<(), SeedError> {
        let checkable_count = self.checkables.len();
        let library_count = self.libraries.len();

        for checkable in self.checkables {
            checkable::save(checkable_deps, checkable).await?;
        }
        for library in self.libraries {
            library::save(library_deps, library).await?;
        }

        tracing::info!(
            checkables = checkable_count,
            libraries = library_count,
            "seed data applied"
        );
        Ok(())
    }
}

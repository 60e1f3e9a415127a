use crate::domain::LibraryName;
use std::path::PathBuf;
use thiserror::Error;

/// 初期データファイルのパスを指定する環境変数
pub const SEED_PATH_VAR: &str = "LIBRARY_SEED_PATH";
/// レポート対象の図書館名を指定する環境変数
pub const REPORT_LIBRARY_VAR: &str = "LIBRARY_REPORT_NAME";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is required")]
    Missing(&'static str),
}

/// 実行時設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed_path: PathBuf,
    pub report_library: Option<LibraryName>,
}

impl Config {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let seed_path = get(SEED_PATH_VAR)
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(SEED_PATH_VAR))?;
        let report_library = get(REPORT_LIBRARY_VAR).map(LibraryName::from);

        Ok(Self {
            seed_path,
            report_library,
        })
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// ISBN - 貸出対象物の識別子
///
/// 完全一致でのみ比較する。ハイフンの除去などの正規化は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// 図書館名 - 図書館集約の識別子（システム全体で一意）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryName(String);

impl LibraryName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LibraryName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LibraryName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 利用者ID - 利用者管理コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatronId(Uuid);

impl PatronId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for PatronId {
    fn default() -> Self {
        Self::new()
    }
}

/// 図書館カードID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryCardId(Uuid);

impl LibraryCardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for LibraryCardId {
    fn default() -> Self {
        Self::new()
    }
}

/// 貸出記録ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckoutId(Uuid);

impl CheckoutId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for CheckoutId {
    fn default() -> Self {
        Self::new()
    }
}

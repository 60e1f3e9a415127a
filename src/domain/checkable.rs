use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Isbn;

/// 貸出対象物の種別（判別子）
///
/// 種別は固定の3つで、`find_by_type` の検索キーとして使用される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckableType {
    Media,
    ScienceKit,
    Ticket,
}

impl CheckableType {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckableType::Media => "media",
            CheckableType::ScienceKit => "science_kit",
            CheckableType::Ticket => "ticket",
        }
    }
}

impl fmt::Display for CheckableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckableType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(CheckableType::Media),
            "science_kit" => Ok(CheckableType::ScienceKit),
            "ticket" => Ok(CheckableType::Ticket),
            _ => Err(format!("Invalid checkable type: {}", s)),
        }
    }
}

/// メディアの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Book,
    Music,
    Video,
}

/// 貸出対象物
///
/// 全種別がISBNとタイトルを持つ。等価性は全フィールドの値比較。
/// 作成後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Checkable {
    Media {
        isbn: Isbn,
        title: String,
        artist: String,
        media_type: MediaType,
    },
    ScienceKit {
        isbn: Isbn,
        title: String,
    },
    Ticket {
        isbn: Isbn,
        title: String,
    },
}

impl Checkable {
    pub fn media(
        isbn: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        Checkable::Media {
            isbn: Isbn::new(isbn),
            title: title.into(),
            artist: artist.into(),
            media_type,
        }
    }

    pub fn science_kit(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Checkable::ScienceKit {
            isbn: Isbn::new(isbn),
            title: title.into(),
        }
    }

    pub fn ticket(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Checkable::Ticket {
            isbn: Isbn::new(isbn),
            title: title.into(),
        }
    }

    pub fn isbn(&self) -> &Isbn {
        match self {
            Checkable::Media { isbn, .. }
            | Checkable::ScienceKit { isbn, .. }
            | Checkable::Ticket { isbn, .. } => isbn,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Checkable::Media { title, .. }
            | Checkable::ScienceKit { title, .. }
            | Checkable::Ticket { title, .. } => title,
        }
    }

    pub fn checkable_type(&self) -> CheckableType {
        match self {
            Checkable::Media { .. } => CheckableType::Media,
            Checkable::ScienceKit { .. } => CheckableType::ScienceKit,
            Checkable::Ticket { .. } => CheckableType::Ticket,
        }
    }

    /// 指定種別に一致するか
    pub fn is_type(&self, checkable_type: CheckableType) -> bool {
        self.checkable_type() == checkable_type
    }
}

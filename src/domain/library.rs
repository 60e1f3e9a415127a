use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Checkable, CheckoutId, LibraryAvailableCheckouts, LibraryCardId, LibraryError, LibraryName,
    OverdueCheckout, PatronId,
};

/// 図書館ごとの在庫数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckableAmount {
    pub checkable: Checkable,
    pub amount: u32,
}

impl CheckableAmount {
    pub fn new(checkable: Checkable, amount: u32) -> Self {
        Self { checkable, amount }
    }

    /// 在庫なしを表すエントリ
    ///
    /// 「在庫エントリがない」と「在庫0」は呼び出し側から区別できない。
    pub fn none(checkable: Checkable) -> Self {
        Self::new(checkable, 0)
    }
}

/// 利用者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub patron_id: PatronId,
    pub name: String,
}

impl Patron {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            patron_id: PatronId::new(),
            name: name.into(),
        }
    }
}

/// 貸出記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    pub checkout_id: CheckoutId,
    pub checkable: Checkable,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Checkout {
    pub fn new(
        checkable: Checkable,
        checkout_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            checkout_id: CheckoutId::new(),
            checkable,
            checkout_date,
            due_date,
        }
    }

    /// 純粋関数：延滞判定
    ///
    /// 返却期限が `now` より厳密に前の場合のみ延滞。期限ちょうどは延滞ではない。
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date < now
    }
}

/// 図書館カード - 1人の利用者に紐づき、貸出記録を保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryCard {
    pub library_card_id: LibraryCardId,
    pub patron: Patron,
    #[serde(default)]
    pub checkouts: Vec<Checkout>,
}

impl LibraryCard {
    pub fn new(patron: Patron) -> Self {
        Self {
            library_card_id: LibraryCardId::new(),
            patron,
            checkouts: Vec::new(),
        }
    }

    pub fn with_checkout(mut self, checkout: Checkout) -> Self {
        self.checkouts.push(checkout);
        self
    }
}

/// シリアライズ用の未検証データ
#[derive(Deserialize)]
struct UncheckedLibrary {
    name: LibraryName,
    #[serde(default)]
    checkables: Vec<CheckableAmount>,
    #[serde(default)]
    library_cards: Vec<LibraryCard>,
}

impl TryFrom<UncheckedLibrary> for Library {
    type Error = LibraryError;

    fn try_from(raw: UncheckedLibrary) -> Result<Self, Self::Error> {
        let mut library = Library::new(raw.name);
        for checkable_amount in raw.checkables {
            library.add_checkable_amount(checkable_amount)?;
        }
        library.library_cards = raw.library_cards;
        Ok(library)
    }
}

/// 図書館集約
///
/// 不変条件：
/// - 名前はシステム全体で一意（保存時にアプリケーション層とリポジトリで強制）
/// - 貸出対象物ごとの在庫エントリは高々1つ（この型で強制）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedLibrary")]
pub struct Library {
    name: LibraryName,
    checkables: Vec<CheckableAmount>,
    library_cards: Vec<LibraryCard>,
}

impl Library {
    pub fn new(name: impl Into<LibraryName>) -> Self {
        Self {
            name: name.into(),
            checkables: Vec::new(),
            library_cards: Vec::new(),
        }
    }

    pub fn name(&self) -> &LibraryName {
        &self.name
    }

    /// 在庫エントリ（登録順）
    pub fn checkables(&self) -> &[CheckableAmount] {
        &self.checkables
    }

    pub fn library_cards(&self) -> &[LibraryCard] {
        &self.library_cards
    }

    /// 在庫エントリを追加する
    ///
    /// # エラー
    /// 同じ貸出対象物のエントリが既にある場合は`LibraryError::DuplicateCheckableAmount`
    pub fn add_checkable_amount(
        &mut self,
        checkable_amount: CheckableAmount,
    ) -> Result<(), LibraryError> {
        if self.checkable_amount_of(&checkable_amount.checkable).is_some() {
            return Err(LibraryError::DuplicateCheckableAmount(
                checkable_amount.checkable.isbn().clone(),
            ));
        }
        self.checkables.push(checkable_amount);
        Ok(())
    }

    pub fn add_library_card(&mut self, library_card: LibraryCard) {
        self.library_cards.push(library_card);
    }

    /// 貸出対象物の在庫エントリを値の等価性で線形探索する
    pub fn checkable_amount_of(&self, checkable: &Checkable) -> Option<&CheckableAmount> {
        self.checkables
            .iter()
            .find(|checkable_amount| &checkable_amount.checkable == checkable)
    }
}

/// 純粋関数：図書館横断の在庫集計
///
/// ビジネスルール：
/// - 在庫エントリを持つ図書館ごとに1件
/// - エントリを持たない図書館は結果に含めない（0件としても報告しない）
/// - 順序は図書館の順、図書館内では在庫エントリの順
pub fn available_checkouts(
    libraries: &[Library],
    checkable: &Checkable,
) -> Vec<LibraryAvailableCheckouts> {
    libraries
        .iter()
        .flat_map(|library| {
            library
                .checkables
                .iter()
                .filter(move |checkable_amount| &checkable_amount.checkable == checkable)
                .map(move |checkable_amount| {
                    LibraryAvailableCheckouts::new(checkable_amount.amount, library.name.clone())
                })
        })
        .collect()
}

/// 純粋関数：延滞中の貸出を列挙する
///
/// 全カードの全貸出について、同じ`now`で判定する。並べ替えは行わない。
pub fn overdue_checkouts(library: &Library, now: DateTime<Utc>) -> Vec<OverdueCheckout> {
    library
        .library_cards
        .iter()
        .flat_map(|library_card| {
            library_card
                .checkouts
                .iter()
                .filter(move |checkout| checkout.is_overdue(now))
                .map(move |checkout| {
                    OverdueCheckout::new(library_card.patron.clone(), checkout.clone())
                })
        })
        .collect()
}

use serde::{Deserialize, Serialize};

use super::{Checkout, LibraryName, Patron};

/// ビュー：図書館ごとの貸出可能数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryAvailableCheckouts {
    pub available: u32,
    pub library_name: LibraryName,
}

impl LibraryAvailableCheckouts {
    pub fn new(available: u32, library_name: LibraryName) -> Self {
        Self {
            available,
            library_name,
        }
    }
}

/// ビュー：延滞中の貸出とその利用者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueCheckout {
    pub patron: Patron,
    pub checkout: Checkout,
}

impl OverdueCheckout {
    pub fn new(patron: Patron, checkout: Checkout) -> Self {
        Self { patron, checkout }
    }
}

use chrono::{Duration, Utc};
use library_catalog::application::checkable::CheckableApplicationError;
use library_catalog::application::library::{
    LibraryApplicationError, LibraryDependencies, get_checkable_amount, get_libraries,
    get_libraries_with_available_checkout, get_library_by_name, get_overdue_checkouts,
    get_overdue_checkouts_at, save,
};
use library_catalog::domain::*;
use library_catalog::ports::library_repository;
use library_catalog::ports::{InsertOutcome, LibraryRepository};
use std::sync::{Arc, Mutex};

mod common;

// ============================================================================
// テストデータ
// ============================================================================

fn white_whale() -> Checkable {
    Checkable::media("1-0", "The White Whale", "Melvin H", MediaType::Book)
}

fn sorcerers_quest() -> Checkable {
    Checkable::media("1-1", "The Sorcerer's Quest", "Ana T", MediaType::Book)
}

fn robotics_kit() -> Checkable {
    Checkable::science_kit("2-1", "Robotics Kit")
}

/// Eastside: "1-0"を3冊、"1-1"はエントリなし
fn eastside() -> Library {
    let mut library = Library::new("Eastside");
    library
        .add_checkable_amount(CheckableAmount::new(white_whale(), 3))
        .unwrap();
    library
}

/// Westside: "2-1"を2個、"1-0"を1冊
fn westside() -> Library {
    let mut library = Library::new("Westside");
    library
        .add_checkable_amount(CheckableAmount::new(robotics_kit(), 2))
        .unwrap();
    library
        .add_checkable_amount(CheckableAmount::new(white_whale(), 1))
        .unwrap();
    library
}

fn deps_with(libraries: Vec<Library>) -> LibraryDependencies {
    let (_, library_deps) = common::in_memory_deps(common::sample_checkables(), libraries);
    library_deps
}

// ============================================================================
// 書き込みを記録するモック実装（テスト用）
// ============================================================================

struct RecordingLibraryRepository {
    libraries: Vec<Library>,
    inserted: Mutex<Vec<Library>>,
}

#[async_trait::async_trait]
impl LibraryRepository for RecordingLibraryRepository {
    async fn find_all(&self) -> library_repository::Result<Vec<Library>> {
        Ok(self.libraries.clone())
    }

    async fn find_by_name(
        &self,
        name: &LibraryName,
    ) -> library_repository::Result<Option<Library>> {
        Ok(self.libraries.iter().find(|l| l.name() == name).cloned())
    }

    async fn insert(&self, library: Library) -> library_repository::Result<InsertOutcome> {
        self.inserted.lock().unwrap().push(library);
        Ok(InsertOutcome::Inserted)
    }
}

/// 走査では見えないが追加時に重複を報告するリポジトリ（同時保存の再現）
struct RacingLibraryRepository;

#[async_trait::async_trait]
impl LibraryRepository for RacingLibraryRepository {
    async fn find_all(&self) -> library_repository::Result<Vec<Library>> {
        Ok(Vec::new())
    }

    async fn find_by_name(
        &self,
        _name: &LibraryName,
    ) -> library_repository::Result<Option<Library>> {
        Ok(None)
    }

    async fn insert(&self, _library: Library) -> library_repository::Result<InsertOutcome> {
        Ok(InsertOutcome::AlreadyExists)
    }
}

/// 常に失敗するリポジトリ
struct FailingLibraryRepository;

#[async_trait::async_trait]
impl LibraryRepository for FailingLibraryRepository {
    async fn find_all(&self) -> library_repository::Result<Vec<Library>> {
        Err("connection lost".into())
    }

    async fn find_by_name(
        &self,
        _name: &LibraryName,
    ) -> library_repository::Result<Option<Library>> {
        Err("connection lost".into())
    }

    async fn insert(&self, _library: Library) -> library_repository::Result<InsertOutcome> {
        Err("connection lost".into())
    }
}

fn deps_for(library_repository: Arc<dyn LibraryRepository>) -> LibraryDependencies {
    let (checkable_deps, _) = common::in_memory_deps(common::sample_checkables(), Vec::new());
    LibraryDependencies {
        library_repository,
        checkable_service: checkable_deps,
    }
}

// ============================================================================
// get_libraries / get_library_by_name
// ============================================================================

#[tokio::test]
async fn test_get_libraries_returns_store_order() {
    let deps = deps_with(vec![eastside(), westside()]);

    let names: Vec<LibraryName> = get_libraries(&deps)
        .await
        .unwrap()
        .iter()
        .map(|l| l.name().clone())
        .collect();

    assert_eq!(
        names,
        vec![LibraryName::new("Eastside"), LibraryName::new("Westside")]
    );
}

#[tokio::test]
async fn test_get_library_by_name_existing() {
    let deps = deps_with(vec![eastside(), westside()]);

    let library = get_library_by_name(&deps, &LibraryName::new("Westside"))
        .await
        .unwrap();

    assert_eq!(library, westside());
}

#[tokio::test]
async fn test_get_library_by_name_missing_returns_not_found() {
    let deps = deps_with(vec![eastside()]);

    let result = get_library_by_name(&deps, &LibraryName::new("Northside")).await;

    assert!(matches!(
        result,
        Err(LibraryApplicationError::LibraryNotFound(ref name)) if name.as_str() == "Northside"
    ));
}

// ============================================================================
// save
// ============================================================================

#[tokio::test]
async fn test_save_unique_name_is_inserted() {
    let repository = Arc::new(RecordingLibraryRepository {
        libraries: vec![eastside()],
        inserted: Mutex::new(Vec::new()),
    });
    let (checkable_deps, _) = common::in_memory_deps(Vec::new(), Vec::new());
    let deps = LibraryDependencies {
        library_repository: repository.clone(),
        checkable_service: checkable_deps,
    };

    save(&deps, westside()).await.unwrap();

    assert_eq!(*repository.inserted.lock().unwrap(), vec![westside()]);
}

#[tokio::test]
async fn test_save_duplicate_name_returns_already_exists_without_write() {
    let repository = Arc::new(RecordingLibraryRepository {
        libraries: vec![eastside()],
        inserted: Mutex::new(Vec::new()),
    });
    let (checkable_deps, _) = common::in_memory_deps(Vec::new(), Vec::new());
    let deps = LibraryDependencies {
        library_repository: repository.clone(),
        checkable_service: checkable_deps,
    };

    let result = save(&deps, Library::new("Eastside")).await;

    assert!(matches!(
        result,
        Err(LibraryApplicationError::LibraryAlreadyExists(_))
    ));
    assert!(repository.inserted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_saved_library_is_found_by_name() {
    let deps = deps_with(Vec::new());

    save(&deps, eastside()).await.unwrap();

    let found = get_library_by_name(&deps, &LibraryName::new("Eastside"))
        .await
        .unwrap();
    assert_eq!(found, eastside());
}

#[tokio::test]
async fn test_save_reports_duplicate_detected_by_repository() {
    let deps = deps_for(Arc::new(RacingLibraryRepository));

    let result = save(&deps, Library::new("Eastside")).await;

    assert!(matches!(
        result,
        Err(LibraryApplicationError::LibraryAlreadyExists(ref name)) if name.as_str() == "Eastside"
    ));
}

#[tokio::test]
async fn test_repository_failure_is_reported_as_repository_error() {
    let deps = deps_for(Arc::new(FailingLibraryRepository));
    let eastside_name = LibraryName::new("Eastside");

    assert!(matches!(
        get_libraries(&deps).await,
        Err(LibraryApplicationError::RepositoryError(_))
    ));
    assert!(matches!(
        get_library_by_name(&deps, &eastside_name).await,
        Err(LibraryApplicationError::RepositoryError(_))
    ));
    assert!(matches!(
        save(&deps, eastside()).await,
        Err(LibraryApplicationError::RepositoryError(_))
    ));
    assert!(matches!(
        get_checkable_amount(&deps, &eastside_name, &Isbn::new("1-0")).await,
        Err(LibraryApplicationError::RepositoryError(_))
    ));
    assert!(matches!(
        get_overdue_checkouts(&deps, &eastside_name).await,
        Err(LibraryApplicationError::RepositoryError(_))
    ));
}

// ============================================================================
// get_checkable_amount
// ============================================================================

#[tokio::test]
async fn test_get_checkable_amount_stocked_returns_stored_amount() {
    let deps = deps_with(vec![eastside()]);

    let amount = get_checkable_amount(&deps, &LibraryName::new("Eastside"), &Isbn::new("1-0"))
        .await
        .unwrap();

    assert_eq!(amount, CheckableAmount::new(white_whale(), 3));
}

#[tokio::test]
async fn test_get_checkable_amount_not_stocked_returns_zero() {
    let deps = deps_with(vec![eastside()]);

    let amount = get_checkable_amount(&deps, &LibraryName::new("Eastside"), &Isbn::new("1-1"))
        .await
        .unwrap();

    assert_eq!(amount.amount, 0);
    assert_eq!(amount.checkable, sorcerers_quest());
}

#[tokio::test]
async fn test_get_checkable_amount_unknown_isbn_propagates_not_found() {
    let deps = deps_with(vec![eastside()]);

    let result =
        get_checkable_amount(&deps, &LibraryName::new("Eastside"), &Isbn::new("9-9")).await;

    assert!(matches!(
        result,
        Err(LibraryApplicationError::Checkable(
            CheckableApplicationError::CheckableNotFound(_)
        ))
    ));
}

#[tokio::test]
async fn test_get_checkable_amount_missing_library_is_precondition_violation() {
    let deps = deps_with(vec![eastside()]);

    let result =
        get_checkable_amount(&deps, &LibraryName::new("Northside"), &Isbn::new("1-0")).await;

    assert!(matches!(
        result,
        Err(LibraryApplicationError::LibraryPreconditionViolated(ref name)) if name.as_str() == "Northside"
    ));
}

#[tokio::test]
async fn test_checkable_not_found_message_is_unchanged_through_library_service() {
    let deps = deps_with(vec![eastside()]);

    let error = get_libraries_with_available_checkout(&deps, &Isbn::new("9-9"))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Checkable with isbn 9-9 not found");
}

// ============================================================================
// get_libraries_with_available_checkout
// ============================================================================

#[tokio::test]
async fn test_available_checkout_one_entry_per_stocking_library() {
    let deps = deps_with(vec![eastside(), Library::new("Northside"), westside()]);

    let result = get_libraries_with_available_checkout(&deps, &Isbn::new("1-0"))
        .await
        .unwrap();

    assert_eq!(
        result,
        vec![
            LibraryAvailableCheckouts::new(3, LibraryName::new("Eastside")),
            LibraryAvailableCheckouts::new(1, LibraryName::new("Westside")),
        ]
    );
}

#[tokio::test]
async fn test_available_checkout_valid_but_unstocked_checkable_is_empty() {
    let deps = deps_with(vec![eastside()]);

    let result = get_libraries_with_available_checkout(&deps, &Isbn::new("1-1"))
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_available_checkout_unknown_isbn_returns_not_found() {
    let deps = deps_with(vec![eastside()]);

    let result = get_libraries_with_available_checkout(&deps, &Isbn::new("9-9")).await;

    assert!(matches!(
        result,
        Err(LibraryApplicationError::Checkable(
            CheckableApplicationError::CheckableNotFound(_)
        ))
    ));
}

// ============================================================================
// get_overdue_checkouts
// ============================================================================

#[tokio::test]
async fn test_overdue_checkouts_strictly_before_now() {
    let now = Utc::now();
    let alice = Patron::new("Alice");
    let bob = Patron::new("Bob");

    let late = Checkout::new(white_whale(), now - Duration::days(20), now - Duration::days(6));
    let due_exactly_now = Checkout::new(robotics_kit(), now - Duration::days(14), now);
    let not_due = Checkout::new(sorcerers_quest(), now, now + Duration::days(14));
    let barely_late = Checkout::new(
        robotics_kit(),
        now - Duration::days(14),
        now - Duration::seconds(1),
    );

    let mut library = eastside();
    library.add_library_card(
        LibraryCard::new(alice.clone())
            .with_checkout(late.clone())
            .with_checkout(due_exactly_now),
    );
    library.add_library_card(
        LibraryCard::new(bob.clone())
            .with_checkout(not_due)
            .with_checkout(barely_late.clone()),
    );
    let deps = deps_with(vec![library]);

    let result = get_overdue_checkouts_at(&deps, &LibraryName::new("Eastside"), now)
        .await
        .unwrap();

    assert_eq!(
        result,
        vec![
            OverdueCheckout::new(alice, late),
            OverdueCheckout::new(bob, barely_late),
        ]
    );
}

#[tokio::test]
async fn test_overdue_checkouts_uses_current_time() {
    let now = Utc::now();
    let carol = Patron::new("Carol");
    let late = Checkout::new(white_whale(), now - Duration::days(30), now - Duration::days(16));
    let future = Checkout::new(white_whale(), now, now + Duration::days(14));

    let mut library = westside();
    library.add_library_card(
        LibraryCard::new(carol.clone())
            .with_checkout(late.clone())
            .with_checkout(future),
    );
    let deps = deps_with(vec![library]);

    let result = get_overdue_checkouts(&deps, &LibraryName::new("Westside"))
        .await
        .unwrap();

    assert_eq!(result, vec![OverdueCheckout::new(carol, late)]);
}

#[tokio::test]
async fn test_overdue_checkouts_only_for_requested_library() {
    let now = Utc::now();
    let late = Checkout::new(white_whale(), now - Duration::days(20), now - Duration::days(6));

    let mut west = westside();
    west.add_library_card(LibraryCard::new(Patron::new("Dave")).with_checkout(late));
    let deps = deps_with(vec![eastside(), west]);

    let result = get_overdue_checkouts_at(&deps, &LibraryName::new("Eastside"), now)
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_overdue_checkouts_missing_library_is_precondition_violation() {
    let deps = deps_with(vec![eastside()]);

    let result = get_overdue_checkouts(&deps, &LibraryName::new("Northside")).await;

    assert!(matches!(
        result,
        Err(LibraryApplicationError::LibraryPreconditionViolated(_))
    ));
}

#![allow(dead_code)]

use library_catalog::adapters::memory::{CheckableRepository, LibraryRepository};
use library_catalog::application::checkable::CheckableDependencies;
use library_catalog::application::library::LibraryDependencies;
use library_catalog::domain::*;
use std::sync::Arc;

/// テスト用の貸出対象物一覧
pub fn sample_checkables() -> Vec<Checkable> {
    vec![
        Checkable::media("1-0", "The White Whale", "Melvin H", MediaType::Book),
        Checkable::media("1-1", "The Sorcerer's Quest", "Ana T", MediaType::Book),
        Checkable::media(
            "1-2",
            "When You're Gone",
            "Complaining at the Disco",
            MediaType::Music,
        ),
        Checkable::media(
            "1-3",
            "Nature Around the World",
            "DocuSpecialists",
            MediaType::Video,
        ),
        Checkable::science_kit("2-0", "Anatomy Model"),
        Checkable::science_kit("2-1", "Robotics Kit"),
        Checkable::ticket("3-0", "Science Museum Tickets"),
        Checkable::ticket("3-1", "National Park Day Pass"),
    ]
}

/// インメモリアダプターで依存関係を組み立てる
pub fn in_memory_deps(
    checkables: Vec<Checkable>,
    libraries: Vec<Library>,
) -> (CheckableDependencies, LibraryDependencies) {
    let checkable_deps = CheckableDependencies {
        checkable_repository: Arc::new(CheckableRepository::with_checkables(checkables)),
    };
    let library_deps = LibraryDependencies {
        library_repository: Arc::new(LibraryRepository::with_libraries(libraries)),
        checkable_service: checkable_deps.clone(),
    };
    (checkable_deps, library_deps)
}

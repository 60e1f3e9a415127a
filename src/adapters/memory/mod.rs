pub mod checkable_repository;
pub mod library_repository;

pub use checkable_repository::CheckableRepository;
pub use library_repository::LibraryRepository;

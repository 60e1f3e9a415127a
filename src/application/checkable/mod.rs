mod checkable_service;
mod errors;

pub use checkable_service::{CheckableDependencies, get_all, get_by_isbn, get_by_type, save};
pub use errors::{CheckableApplicationError, Result};

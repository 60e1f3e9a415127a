mod errors;
mod library_service;

pub use errors::{LibraryApplicationError, Result};
pub use library_service::{
    LibraryDependencies, get_checkable_amount, get_libraries,
    get_libraries_with_available_checkout, get_library_by_name, get_overdue_checkouts,
    get_overdue_checkouts_at, save,
};

pub mod checkable;
pub mod errors;
pub mod library;
pub mod value_objects;
pub mod views;

pub use checkable::*;
pub use errors::*;
pub use library::{CheckableAmount, Checkout, Library, LibraryCard, Patron};
pub use value_objects::*;
pub use views::*;

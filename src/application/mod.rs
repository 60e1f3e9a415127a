pub mod checkable;
pub mod library;

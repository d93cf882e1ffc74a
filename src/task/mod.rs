//! Task management module
//!
//! Task model plus the per-user task book, persisted wholesale through
//! the store seam.

pub mod book;
pub mod model;

pub use book::TaskBook;
pub use model::{Priority, Task};

//! A generic last-in-first-out stack backed by a growable vector.

pub mod stack;

pub use stack::{Stack, StackError, DEFAULT_CAPACITY};

pub type Result<T, E = StackError> = std::result::Result<T, E>;

//! Storage adapters.
//!
//! Implements the `port::Storage` trait for on-disk and in-memory backends.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

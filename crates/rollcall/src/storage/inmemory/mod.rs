//! In-memory storage backend for testing.

mod store;

pub use store::InMemoryUserStore;

//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `UserStore` trait
//! defined in `rollcall_core::storage`, selected via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed store for tests
//! - `dynamodb`: AWS DynamoDB store using `aws-sdk-dynamodb`
//!
//! Unlike mutually exclusive server backends, these can be enabled
//! together: a test suite typically runs the in-memory fake against code
//! that is deployed with the DynamoDB store.

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb'. \
    Example: cargo build -p rollcall --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbUserStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryUserStore;

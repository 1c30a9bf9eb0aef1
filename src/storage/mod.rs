//! Linkdock persistence layer.
//!
//! Provides SQLite connection management, schema migrations and the named
//! JSON blob store the application state is mirrored into.
//!
//! # Usage
//!
//! ```no_run
//! use linkdock::storage::BlobStore;
//!
//! // Open a persistent store
//! let store = BlobStore::open("linkdock.db").expect("failed to open store");
//!
//! // Or use an in-memory store for testing
//! let store = BlobStore::open_in_memory().expect("failed to open in-memory store");
//! ```

pub mod blob_store;
pub mod connection;
pub mod migrations;

pub use blob_store::BlobStore;
pub use connection::Database;

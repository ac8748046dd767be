//! Coder Fest DB Library
//!
//! Key-value record store for registrations. The store is deliberately
//! narrow: exact-key get/set and key-prefix scan are the only query shapes,
//! with a Postgres backend for deployments and an in-memory backend for
//! development and tests.

pub mod kv;
pub mod registrations;

// Re-export commonly used types
pub use kv::memory::MemoryKvStore;
pub use kv::postgres::PgKvStore;
pub use kv::KvStore;
pub use registrations::RegistrationRepository;

//! Database layer - connection provider, schema and document stores
//!
//! # Design Principles
//!
//! - One lazily created pool per process, passed explicitly to stores
//! - Rely on key constraints, handle conflicts - no check-then-insert
//! - Partial updates are a single statement against one document

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, ConnectionProvider};
pub use repos::*;

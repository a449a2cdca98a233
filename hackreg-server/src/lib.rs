//! hackreg-server: HTTP API for hackathon listings and participant profiles
//!
//! Stateless axum handlers over two document stores, PostgreSQL JSONB in
//! production and in-memory for tests and local runs.

pub mod db;
pub mod http;
pub mod session;

pub use db::{ConnectionProvider, HackathonStore, MemoryStore, StoreError, UserStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use session::{HeaderWalletSession, SessionError, WalletSession};

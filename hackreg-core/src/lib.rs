//! hackreg-core: domain models and configuration for hackreg
//!
//! Hackathon listings and wallet-keyed user profiles, the pure validation
//! run before anything is persisted, and the runtime configuration shared
//! by the server and the CLI.

pub mod config;
pub mod error;
pub mod models;

pub use config::HackregConfig;
pub use error::{ConfigError, Result};
pub use models::{
    validate, ExperienceLevel, Hackathon, HackathonDraft, NewHackathon, UserPatch, UserProfile,
    ValidationError, ValidationErrors, WalletAddress,
};

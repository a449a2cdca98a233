//! Domain models with validation at construction
//!
//! All client input is validated before it reaches a store.
//! Invalid input returns ValidationError, not panic.

pub mod hackathon;
pub mod user;
pub mod validation;
pub mod wallet;

pub use hackathon::{validate, Hackathon, HackathonDraft, NewHackathon};
pub use user::{ExperienceLevel, UserPatch, UserProfile};
pub use validation::{ValidationError, ValidationErrors};
pub use wallet::WalletAddress;

//! Wallet address - the primary key of a user profile

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::ValidationError;

/// Validated wallet address.
///
/// Surrounding whitespace is trimmed; case is preserved because the
/// address is an opaque identifier issued by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Create a wallet address, rejecting empty or blank input.
    ///
    /// # Example
    /// ```
    /// use hackreg_core::models::WalletAddress;
    ///
    /// assert_eq!(WalletAddress::new(" 0xabc ").unwrap().as_str(), "0xabc");
    /// assert!(WalletAddress::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing {
                field: "walletAddress",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Validate an optional raw value, treating `None` as missing.
    pub fn from_optional(s: Option<&str>) -> Result<Self, ValidationError> {
        Self::new(s.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

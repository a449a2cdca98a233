//! User profile keyed by wallet address

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::{ValidationError, WalletAddress};

/// Self-reported experience of a participant
///
/// Deserializes through `FromStr`, so an unknown name is reported as
/// `InvalidVariant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "experienceLevel",
                value: s.to_owned(),
            })
    }
}

impl<'de> Deserialize<'de> for ExperienceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Participant profile.
///
/// Deserializing a stored document yields the normalized projection:
/// absent optional fields become `None`, absent lists become empty and
/// `lookingForTeam` falls back to `false`. Serialization always emits every
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub wallet_address: WalletAddress,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub looking_for_team: bool,
}

impl UserProfile {
    /// Empty profile for a freshly seen wallet.
    pub fn new(wallet_address: WalletAddress) -> Self {
        Self {
            wallet_address,
            name: None,
            skills: Vec::new(),
            bio: None,
            interests: Vec::new(),
            experience_level: None,
            looking_for_team: false,
        }
    }

    /// Replace the fields named in `patch`; everything else is kept.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(skills) = &patch.skills {
            self.skills.clone_from(skills);
        }
        if let Some(bio) = &patch.bio {
            self.bio.clone_from(bio);
        }
        if let Some(interests) = &patch.interests {
            self.interests.clone_from(interests);
        }
        if let Some(level) = patch.experience_level {
            self.experience_level = level;
        }
        if let Some(looking) = patch.looking_for_team {
            self.looking_for_team = looking;
        }
    }
}

/// Partial profile update.
///
/// Outer `None` leaves a field untouched. For the nullable fields an
/// explicit JSON `null` deserializes to `Some(None)` and clears the value.
/// Serializing emits only the named fields, which is the shape a document
/// store merges into the stored profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<Option<ExperienceLevel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub looking_for_team: Option<bool>,
}

impl UserPatch {
    /// True when the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.skills.is_none()
            && self.bio.is_none()
            && self.interests.is_none()
            && self.experience_level.is_none()
            && self.looking_for_team.is_none()
    }

    /// The patch as a JSON object holding only the named fields.
    pub fn to_document(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Present field (even `null`) maps to `Some`, absent field stays `None`
/// through `#[serde(default)]`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

//! Hackathon listing - draft, validation and stored document
//!
//! A `HackathonDraft` is the raw request payload. `validate` is a pure
//! function returning every violation; `HackathonDraft::finalize` runs it
//! and only then builds the typed `NewHackathon` that a store may persist.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ValidationError, ValidationErrors};

/// Default lower bound on team size
pub const DEFAULT_MIN_TEAM_SIZE: u32 = 1;

/// Default upper bound on team size
pub const DEFAULT_MAX_TEAM_SIZE: u32 = 5;

/// Smallest team size either bound may take
const TEAM_SIZE_FLOOR: i64 = 1;

/// Unvalidated hackathon payload as submitted by a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub registration_deadline: Option<String>,
    pub location: Option<String>,
    pub min_team_size: Option<i64>,
    pub max_team_size: Option<i64>,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
    pub contact_number: Option<String>,
    pub inhouse: Option<bool>,
    pub outhouse: Option<bool>,
    pub registrationlink: Option<String>,
}

/// Validated hackathon, ready to be stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHackathon {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub registration_deadline: DateTime<Utc>,
    pub location: String,
    pub min_team_size: u32,
    pub max_team_size: u32,
    pub organizer_name: String,
    pub organizer_email: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    pub inhouse: bool,
    pub outhouse: bool,
    pub registrationlink: String,
}

/// Stored hackathon document with its server-assigned identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: NewHackathon,
}

impl HackathonDraft {
    /// Fill the fields that carry schema defaults.
    ///
    /// Only unset values are touched; explicit values are kept as submitted.
    pub fn apply_defaults(&mut self) {
        self.inhouse.get_or_insert(false);
        self.outhouse.get_or_insert(false);
        self.registrationlink.get_or_insert_with(String::new);
        self.min_team_size.get_or_insert(i64::from(DEFAULT_MIN_TEAM_SIZE));
        self.max_team_size.get_or_insert(i64::from(DEFAULT_MAX_TEAM_SIZE));
    }

    /// Apply defaults, validate, and build the typed document.
    pub fn finalize(mut self) -> Result<NewHackathon, ValidationErrors> {
        self.apply_defaults();

        let errors = validate(&self);
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        self.into_validated()
    }

    /// Conversion after `validate` returned no violations.
    ///
    /// Each field is re-read through the same helpers `validate` uses, so a
    /// draft that passed validation cannot fail here; the error path exists
    /// only to keep the conversion total.
    fn into_validated(self) -> Result<NewHackathon, ValidationErrors> {
        let missing = |field| ValidationErrors::single(ValidationError::Missing { field });

        Ok(NewHackathon {
            name: required(self.name).ok_or_else(|| missing("name"))?,
            description: required(self.description).ok_or_else(|| missing("description"))?,
            start_date: timestamp("startDate", self.start_date.as_deref())?,
            end_date: timestamp("endDate", self.end_date.as_deref())?,
            registration_deadline: timestamp(
                "registrationDeadline",
                self.registration_deadline.as_deref(),
            )?,
            location: required(self.location).ok_or_else(|| missing("location"))?,
            min_team_size: team_size("minTeamSize", self.min_team_size, DEFAULT_MIN_TEAM_SIZE)?,
            max_team_size: team_size("maxTeamSize", self.max_team_size, DEFAULT_MAX_TEAM_SIZE)?,
            organizer_name: required(self.organizer_name)
                .ok_or_else(|| missing("organizerName"))?,
            organizer_email: required(self.organizer_email)
                .ok_or_else(|| missing("organizerEmail"))?,
            contact_number: self.contact_number.filter(|c| !c.trim().is_empty()),
            inhouse: self.inhouse.unwrap_or(false),
            outhouse: self.outhouse.unwrap_or(false),
            registrationlink: self.registrationlink.unwrap_or_default(),
        })
    }
}

impl NewHackathon {
    /// Attach a fresh identity to a validated listing.
    pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> Hackathon {
        Hackathon {
            id,
            created_at,
            details: self,
        }
    }
}

/// Check a draft against every field and cross-field rule.
///
/// Unset flags count as `false` and an unset `registrationlink` as empty,
/// so the result is the same before and after `apply_defaults`.
/// `minTeamSize <= maxTeamSize` is deliberately not checked.
pub fn validate(draft: &HackathonDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let text_fields = [
        ("name", &draft.name),
        ("description", &draft.description),
        ("location", &draft.location),
        ("organizerName", &draft.organizer_name),
        ("organizerEmail", &draft.organizer_email),
    ];
    for (field, value) in text_fields {
        if is_blank(value.as_deref()) {
            errors.push(ValidationError::Missing { field });
        }
    }

    let date_fields = [
        ("startDate", &draft.start_date),
        ("endDate", &draft.end_date),
        ("registrationDeadline", &draft.registration_deadline),
    ];
    for (field, value) in date_fields {
        if let Err(e) = timestamp(field, value.as_deref()) {
            errors.extend(e.into_vec());
        }
    }

    for (field, value, default) in [
        ("minTeamSize", draft.min_team_size, DEFAULT_MIN_TEAM_SIZE),
        ("maxTeamSize", draft.max_team_size, DEFAULT_MAX_TEAM_SIZE),
    ] {
        if let Err(e) = team_size(field, value, default) {
            errors.extend(e.into_vec());
        }
    }

    let inhouse = draft.inhouse.unwrap_or(false);
    let outhouse = draft.outhouse.unwrap_or(false);

    if inhouse && outhouse {
        errors.push(ValidationError::MutuallyExclusive {
            first: "inhouse",
            second: "outhouse",
        });
    }

    if outhouse && is_blank(draft.registrationlink.as_deref()) {
        errors.push(ValidationError::RequiredWhen {
            field: "registrationlink",
            condition: "outhouse is true",
        });
    }

    errors
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn timestamp(field: &'static str, raw: Option<&str>) -> Result<DateTime<Utc>, ValidationErrors> {
    let raw = match raw.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return Err(ValidationError::Missing { field }.into()),
    };

    parse_timestamp(raw).ok_or_else(|| {
        ValidationError::InvalidFormat {
            field,
            reason: "expected a date (YYYY-MM-DD) or an RFC 3339 timestamp",
        }
        .into()
    })
}

fn team_size(
    field: &'static str,
    value: Option<i64>,
    default: u32,
) -> Result<u32, ValidationErrors> {
    let value = value.unwrap_or(i64::from(default));

    if value < TEAM_SIZE_FLOOR {
        return Err(ValidationError::BelowMinimum {
            field,
            min: TEAM_SIZE_FLOOR,
            value,
        }
        .into());
    }

    u32::try_from(value).map_err(|_| {
        ValidationError::InvalidFormat {
            field,
            reason: "team size is too large",
        }
        .into()
    })
}

/// Parse a calendar date or date-time into UTC.
///
/// Accepted forms, in order: RFC 3339 (`2025-01-01T09:00:00+02:00`), a
/// naive date-time taken as UTC (`2025-01-01T09:00[:00]`), and a bare
/// date taken as midnight UTC (`2025-01-01`).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

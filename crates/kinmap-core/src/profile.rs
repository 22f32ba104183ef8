//! Identity profile records consumed by the network generator.
//!
//! Profiles are produced elsewhere (generator, persistence API) and are only
//! read here. Unknown JSON keys are ignored so full identity-profile rows
//! deserialize without a projection step.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Textual criminal-record value that maps to `true`.
pub const HAS_RECORDS: &str = "Has Records";

/// A synthetic identity profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub city: String,
    pub country: String,
    pub company: String,
    pub industry: String,
    pub job_title: String,
    pub marital_status: String,
    pub sexual_orientation: String,
    pub gender_identity: String,
    #[serde(default, deserialize_with = "deserialize_record_flag")]
    pub criminal_record: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
}

impl Profile {
    /// Absolute age difference between two profiles.
    pub fn age_gap(&self, other: &Profile) -> u32 {
        self.age.abs_diff(other.age)
    }

    /// Name to show for this profile, falling back to first + last name.
    pub fn display_name(&self) -> String {
        if self.full_name.is_empty() {
            format!("{} {}", self.first_name, self.last_name)
        } else {
            self.full_name.clone()
        }
    }
}

/// Accepts either a JSON bool or the application's textual form.
fn deserialize_record_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RecordFlag {
        Flag(bool),
        Text(String),
    }

    Ok(match RecordFlag::deserialize(deserializer)? {
        RecordFlag::Flag(flag) => flag,
        RecordFlag::Text(text) => text == HAS_RECORDS,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileList {
    List(Vec<Profile>),
    Wrapped { profiles: Vec<Profile> },
}

/// Parse a profile list from JSON: either a bare array or `{ "profiles": [...] }`.
pub fn parse_profiles(json: &str) -> Result<Vec<Profile>> {
    let profiles = match serde_json::from_str::<ProfileList>(json)? {
        ProfileList::List(profiles) => profiles,
        ProfileList::Wrapped { profiles } => profiles,
    };

    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in &profiles {
        if !seen.insert(profile.id) {
            return Err(Error::InvalidProfile(format!(
                "duplicate profile id {}",
                profile.id
            )));
        }
    }

    debug!("Parsed {} profiles", profiles.len());
    Ok(profiles)
}

/// Read and parse a profile list from a JSON file.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<Vec<Profile>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_profiles(&text)
}

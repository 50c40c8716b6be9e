use thiserror::Error;

use super::data::{UserId, UserProfile};

/// The roster document embedded at compile time.
/// The directory is seeded from it once at startup; there is no
/// runtime persistence and no way to add or edit profiles afterwards.
const ROSTER_JSON: &str = include_str!("../../assets/roster.json");

/// Errors raised by directory construction and lookup
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// No profile carries the requested id
    #[error("no profile with id {0}")]
    NotFound(UserId),
    /// Two roster entries share the same id
    #[error("duplicate profile id {0}")]
    DuplicateId(UserId),
    /// A roster entry has a blank display name
    #[error("profile {0} has an empty name")]
    EmptyName(UserId),
    /// The roster document failed to parse
    #[error("failed to parse roster: {0}")]
    Roster(#[from] serde_json::Error),
}

/// The ProfileDirectory holds the canonical set of user profiles.
///
/// It is built once during startup, validated, and then only ever read:
/// the rest of the application receives it by shared reference and queries
/// it through `all` and `find_by_id`. Insertion order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDirectory {
    profiles: Vec<UserProfile>,
}

impl ProfileDirectory {
    /// Build a directory from a list of profiles, validating its invariants:
    /// ids must be unique and names must be non-empty.
    pub fn new(profiles: Vec<UserProfile>) -> Result<Self, DirectoryError> {
        let mut seen = std::collections::HashSet::new();
        for profile in &profiles {
            if profile.name.trim().is_empty() {
                return Err(DirectoryError::EmptyName(profile.id));
            }
            if !seen.insert(profile.id) {
                return Err(DirectoryError::DuplicateId(profile.id));
            }
        }
        Ok(ProfileDirectory { profiles })
    }

    /// Parse a roster document (a JSON array of profiles) and validate it
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let profiles: Vec<UserProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    /// Build the directory from the bundled roster
    pub fn seed() -> Result<Self, DirectoryError> {
        Self::from_json(ROSTER_JSON)
    }

    /// All profiles in display order.
    /// Returned as a borrowed slice, so callers get a read-only view.
    pub fn all(&self) -> &[UserProfile] {
        &self.profiles
    }

    /// Look up a profile by id.
    /// Ids are unique, so at most one record can match.
    pub fn find_by_id(&self, id: UserId) -> Result<&UserProfile, DirectoryError> {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Number of profiles in the directory
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the directory holds no profiles at all
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

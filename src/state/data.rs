/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the directory layer and the UI layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user profile
pub type UserId = i64;

/// Represents a single user in the directory
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Unique directory ID
    pub id: UserId,
    /// Display name (e.g., "Michaela Runnings"), never empty
    pub name: String,
    /// Presence flag: drives the "Active"/"Away" label and avatar ring color
    pub is_online: bool,
    /// Where the profile picture comes from
    pub avatar: ImageRef,
    /// When the user was last active (static, seeded with the roster)
    pub last_seen: DateTime<Utc>,
}

/// Reference to a profile picture
///
/// Two sources exist depending on the user record:
/// - `Remote`: fetched over HTTP from the given URL
/// - `Local`: read from a bundled asset under the assets directory
///
/// The state layer treats the reference as opaque data; resolution to
/// pixels happens entirely in the UI layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    /// Image URL (e.g., "https://randomuser.me/api/portraits/women/12.jpg")
    Remote(String),
    /// Asset name relative to the assets directory (e.g., "avatars/dan_koeller.png")
    Local(String),
}

impl UserProfile {
    /// The presence label shown next to the user's name
    pub fn status_label(&self) -> &'static str {
        if self.is_online {
            "Active"
        } else {
            "Away"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile(is_online: bool) -> UserProfile {
        UserProfile {
            id: 7,
            name: "Kazuo Tanaka".to_string(),
            is_online,
            avatar: ImageRef::Remote("https://example.com/kazuo.jpg".to_string()),
            last_seen: "2026-08-03T18:47:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_status_label() {
        assert_eq!(sample_profile(true).status_label(), "Active");
        assert_eq!(sample_profile(false).status_label(), "Away");
    }

    #[test]
    fn test_image_ref_roundtrip() {
        let profile = sample_profile(true);

        let json = serde_json::to_string(&profile).unwrap();
        let restored: UserProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(profile, restored);
    }

    #[test]
    fn test_local_image_ref_json_shape() {
        // The roster document spells local references as {"local": "..."}
        let image_ref: ImageRef =
            serde_json::from_str(r#"{"local": "avatars/dan_koeller.png"}"#).unwrap();
        assert_eq!(
            image_ref,
            ImageRef::Local("avatars/dan_koeller.png".to_string())
        );
    }
}

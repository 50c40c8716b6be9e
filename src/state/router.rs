/// Two-screen navigation state machine
///
/// The application only ever shows one of two screens: the user list or a
/// single user's details. The Router owns which one is active and validates
/// every transition against the directory, so the UI layer can never end up
/// rendering a detail screen for an id that does not exist.

use thiserror::Error;

use super::data::UserId;
use super::directory::ProfileDirectory;

/// Path string for the list route
const USER_LIST_PATH: &str = "users_list";
/// Path prefix for the detail route; the id segment follows it
const USER_DETAILS_PREFIX: &str = "user_details/";

/// The currently displayed logical screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The scrollable list of all profiles (start screen)
    UserList,
    /// One user's detail screen, keyed by their id
    UserDetails(UserId),
}

/// Errors raised by route decoding and profile selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The requested id resolves to no profile in the directory
    #[error("no profile with id {0}")]
    NotFound(UserId),
    /// The route parameter is not a well-formed profile id
    #[error("invalid profile identifier {0:?}")]
    InvalidIdentifier(String),
}

impl Route {
    /// Render the route as its path string
    /// (e.g., "users_list" or "user_details/3")
    pub fn path(&self) -> String {
        match self {
            Route::UserList => USER_LIST_PATH.to_string(),
            Route::UserDetails(id) => format!("{}{}", USER_DETAILS_PREFIX, id),
        }
    }

    /// Decode a path string back into a route.
    ///
    /// Decoding never assumes the id segment is well-formed: a path that
    /// names no known screen, or carries a non-integer id segment, yields
    /// `InvalidIdentifier` instead of panicking.
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        if path == USER_LIST_PATH {
            return Ok(Route::UserList);
        }
        match path.strip_prefix(USER_DETAILS_PREFIX) {
            Some(raw_id) => Ok(Route::UserDetails(Self::parse_user_id(raw_id)?)),
            None => Err(RouteError::InvalidIdentifier(path.to_string())),
        }
    }

    /// Decode the id segment of a detail route.
    /// Round-trips every valid id exactly: `parse_user_id(&id.to_string()) == Ok(id)`.
    pub fn parse_user_id(raw: &str) -> Result<UserId, RouteError> {
        raw.trim()
            .parse::<UserId>()
            .map_err(|_| RouteError::InvalidIdentifier(raw.to_string()))
    }
}

/// The Router tracks the active route and applies transitions.
///
/// No history is kept beyond the current route: the screen hierarchy is two
/// levels deep, so going back always lands on the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Route,
}

impl Router {
    /// Create a router showing the user list
    pub fn new() -> Self {
        Router {
            current: Route::UserList,
        }
    }

    /// The route the UI should be rendering right now
    pub fn current_route(&self) -> Route {
        self.current
    }

    /// Navigate from the list to a user's detail screen.
    ///
    /// The transition only happens if the directory resolves the id;
    /// otherwise the router refuses it, stays on the list, and reports
    /// `NotFound` so the UI can show a "profile not found" state instead
    /// of a blank detail screen.
    ///
    /// A select arriving while a detail screen is already active is
    /// ignored (a double-tap on a card delivers two of them).
    pub fn select_profile(
        &mut self,
        directory: &ProfileDirectory,
        id: UserId,
    ) -> Result<(), RouteError> {
        if let Route::UserDetails(_) = self.current {
            return Ok(());
        }
        match directory.find_by_id(id) {
            Ok(_) => {
                self.current = Route::UserDetails(id);
                Ok(())
            }
            Err(_) => Err(RouteError::NotFound(id)),
        }
    }

    /// Navigate to a detail screen from a raw route parameter.
    ///
    /// The parameter is decoded first; a malformed segment is treated
    /// exactly like an unknown id: the router stays on the list and the
    /// error is reported to the caller.
    pub fn select_profile_param(
        &mut self,
        directory: &ProfileDirectory,
        raw: &str,
    ) -> Result<(), RouteError> {
        let id = Route::parse_user_id(raw)?;
        self.select_profile(directory, id)
    }

    /// Return to the user list.
    /// Already being on the list is fine: back from the root is a no-op.
    pub fn go_back(&mut self) {
        self.current = Route::UserList;
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{ImageRef, UserProfile};

    fn sample_directory() -> ProfileDirectory {
        let profiles = [1, 2, 3]
            .iter()
            .map(|&id| UserProfile {
                id,
                name: format!("User {}", id),
                is_online: true,
                avatar: ImageRef::Remote(format!("https://example.com/{}.jpg", id)),
                last_seen: "2026-08-01T12:00:00Z".parse().unwrap(),
            })
            .collect();
        ProfileDirectory::new(profiles).unwrap()
    }

    #[test]
    fn test_starts_on_user_list() {
        let router = Router::new();
        assert_eq!(router.current_route(), Route::UserList);
    }

    #[test]
    fn test_select_existing_profile() {
        let directory = sample_directory();
        let mut router = Router::new();

        router.select_profile(&directory, 3).unwrap();

        assert_eq!(router.current_route(), Route::UserDetails(3));
    }

    #[test]
    fn test_select_missing_profile_is_refused() {
        let directory = sample_directory();
        let mut router = Router::new();

        let result = router.select_profile(&directory, 99);

        assert_eq!(result, Err(RouteError::NotFound(99)));
        assert_eq!(router.current_route(), Route::UserList);
    }

    #[test]
    fn test_go_back_from_details() {
        let directory = sample_directory();
        let mut router = Router::new();

        router.select_profile(&directory, 3).unwrap();
        router.go_back();

        assert_eq!(router.current_route(), Route::UserList);
    }

    #[test]
    fn test_go_back_from_list_is_a_noop() {
        let mut router = Router::new();
        router.go_back();
        assert_eq!(router.current_route(), Route::UserList);
    }

    #[test]
    fn test_select_back_select_roundtrip() {
        let directory = sample_directory();
        let mut router = Router::new();

        router.select_profile(&directory, 2).unwrap();
        let first_visit = router.current_route();

        router.go_back();
        router.select_profile(&directory, 2).unwrap();

        assert_eq!(router.current_route(), first_visit);
        assert_eq!(router.current_route(), Route::UserDetails(2));
    }

    #[test]
    fn test_select_while_on_details_is_ignored() {
        let directory = sample_directory();
        let mut router = Router::new();

        router.select_profile(&directory, 1).unwrap();
        router.select_profile(&directory, 2).unwrap();

        assert_eq!(router.current_route(), Route::UserDetails(1));
    }

    #[test]
    fn test_route_path_roundtrip() {
        for route in [Route::UserList, Route::UserDetails(3), Route::UserDetails(0)] {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_id_segments() {
        for raw in ["abc", "", "12.5", "9999999999999999999999"] {
            let result = Route::parse_user_id(raw);
            assert_eq!(
                result,
                Err(RouteError::InvalidIdentifier(raw.to_string())),
                "segment {:?} should not decode",
                raw
            );
        }
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        let result = Route::parse("settings");
        assert!(matches!(result, Err(RouteError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_select_with_malformed_param_stays_on_list() {
        let directory = sample_directory();
        let mut router = Router::new();

        let result = router.select_profile_param(&directory, "not-a-number");

        assert!(matches!(result, Err(RouteError::InvalidIdentifier(_))));
        assert_eq!(router.current_route(), Route::UserList);
    }

    #[test]
    fn test_select_with_valid_param() {
        let directory = sample_directory();
        let mut router = Router::new();

        router.select_profile_param(&directory, "2").unwrap();

        assert_eq!(router.current_route(), Route::UserDetails(2));
    }
}

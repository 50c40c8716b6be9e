/// State management module
///
/// This module handles all non-presentation logic, including:
/// - The read-only user directory and its roster seeding (directory.rs)
/// - Shared data structures (data.rs)
/// - Navigation between the list and detail screens (router.rs)

pub mod data;
pub mod directory;
pub mod router;

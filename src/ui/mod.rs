/// UI widget module
///
/// Reusable pieces of the two screens:
/// - `app_bar.rs` - top bar with the title and the back affordance
/// - `profile_card.rs` - profile card rows, the ringed avatar, and the
///   detail screen layout
///
/// Widgets only read `state` data; every interaction is reported back to
/// the main update loop as a `Message`.

pub mod app_bar;
pub mod profile_card;

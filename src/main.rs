use iced::widget::{column, container, image, scrollable, text, Column};
use iced::{Element, Length, Task, Theme};
use std::collections::HashMap;
use std::path::Path;

// Declare the state and ui modules
mod state;
mod ui;

use state::data::{ImageRef, UserId};
use state::directory::ProfileDirectory;
use state::router::{Route, Router};

/// Directory holding bundled assets (local avatars)
const ASSETS_DIR: &str = "assets";

/// Result of resolving one user's avatar in the background
#[derive(Debug, Clone)]
pub struct AvatarResult {
    user_id: UserId,
    handle: Option<image::Handle>,
}

/// Main application state
struct ProfileBrowser {
    /// The read-only user directory, seeded once at startup
    directory: ProfileDirectory,
    /// Which screen is active
    router: Router,
    /// Avatars that have finished resolving, keyed by user id
    avatars: HashMap<UserId, image::Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a profile card in the list
    ProfileSelected(UserId),
    /// User clicked the back button on the detail screen
    BackPressed,
    /// Background avatar resolution completed
    AvatarLoaded(AvatarResult),
}

impl ProfileBrowser {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Seed the directory from the bundled roster
        // If this fails, we panic because the app cannot function without its user list
        let directory = ProfileDirectory::seed()
            .expect("Failed to load the bundled roster. The embedded JSON must be valid.");

        println!(
            "👥 Profile browser initialized with {} users",
            directory.len()
        );

        // Resolve every avatar in the background; the list shows
        // placeholder initials until the handles arrive
        let fetches: Vec<Task<Message>> = directory
            .all()
            .iter()
            .map(|profile| {
                Task::perform(
                    resolve_avatar(profile.id, profile.avatar.clone()),
                    Message::AvatarLoaded,
                )
            })
            .collect();

        let status = format!("Ready. {} users in directory.", directory.len());

        (
            ProfileBrowser {
                directory,
                router: Router::new(),
                avatars: HashMap::new(),
                status,
            },
            Task::batch(fetches),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProfileSelected(id) => {
                match self.router.select_profile(&self.directory, id) {
                    Ok(()) => {
                        if let Ok(profile) = self.directory.find_by_id(id) {
                            self.status = format!("Viewing {}", profile.name);
                        }
                    }
                    // Stale or malformed id: the router stays on the list,
                    // we just surface the refusal in the status line
                    Err(e) => {
                        eprintln!("⚠️  Refused navigation: {}", e);
                        self.status = format!("Profile {} not found.", id);
                    }
                }
                Task::none()
            }
            Message::BackPressed => {
                self.router.go_back();
                self.status = format!("Ready. {} users in directory.", self.directory.len());
                Task::none()
            }
            Message::AvatarLoaded(result) => {
                // Failed fetches already logged; keep the placeholder
                if let Some(handle) = result.handle {
                    self.avatars.insert(result.user_id, handle);
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let can_go_back = matches!(self.router.current_route(), Route::UserDetails(_));

        let screen = match self.router.current_route() {
            Route::UserList => self.user_list_screen(),
            Route::UserDetails(id) => self.user_details_screen(id),
        };

        column![
            ui::app_bar::app_bar("Messaging App Users", can_go_back),
            container(screen).height(Length::Fill),
            text(self.status.as_str()).size(14),
        ]
        .spacing(8)
        .padding(8)
        .into()
    }

    /// The scrollable list of profile cards
    fn user_list_screen(&self) -> Element<Message> {
        let mut cards = Column::new().spacing(6).padding(8);

        for profile in self.directory.all() {
            cards = cards.push(ui::profile_card::profile_card(
                profile,
                self.avatars.get(&profile.id),
                Message::ProfileSelected(profile.id),
            ));
        }

        scrollable(cards).height(Length::Fill).into()
    }

    /// One user's detail screen
    fn user_details_screen(&self, id: UserId) -> Element<Message> {
        match self.directory.find_by_id(id) {
            Ok(profile) => ui::profile_card::profile_details(profile, self.avatars.get(&id)),
            // The router refuses unknown ids, so reaching this arm means the
            // route went stale; show the not-found state rather than a blank
            // detail screen
            Err(_) => container(text(format!("Profile {} not found", id)).size(24))
                .center_x(Length::Fill)
                .padding(40)
                .into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Messaging App Users",
        ProfileBrowser::update,
        ProfileBrowser::view,
    )
    .theme(ProfileBrowser::theme)
    .centered()
    .run_with(ProfileBrowser::new)
}

/// Resolve one user's avatar to displayable pixels.
///
/// Remote references are fetched over HTTP; local ones are read from the
/// bundled assets directory. A failure is logged and leaves the initial
/// placeholder in place, it never takes the screen down.
async fn resolve_avatar(user_id: UserId, image_ref: ImageRef) -> AvatarResult {
    let handle = match image_ref {
        ImageRef::Remote(url) => match fetch_remote_avatar(&url).await {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("⚠️  Failed to fetch avatar for user {}: {}", user_id, e);
                None
            }
        },
        ImageRef::Local(asset) => match tokio::fs::read(Path::new(ASSETS_DIR).join(&asset)).await
        {
            Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
            Err(e) => {
                eprintln!("⚠️  Failed to read bundled avatar {}: {}", asset, e);
                None
            }
        },
    };

    AvatarResult { user_id, handle }
}

/// Download a remote avatar and wrap it in an image handle
async fn fetch_remote_avatar(url: &str) -> Result<image::Handle, reqwest::Error> {
    let bytes = reqwest::get(url).await?.error_for_status()?.bytes().await?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

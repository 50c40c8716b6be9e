/// Profile card widgets
///
/// The same three building blocks render both screens, at different sizes
/// and alignments: the ringed avatar, the name/status text block, and the
/// clickable card that combines them on the list screen.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Border, Color, Element, Length};

use crate::state::data::UserProfile;
use crate::Message;

/// Avatar ring color for online users
const ONLINE_RING: Color = Color {
    r: 0.56,
    g: 0.93,
    b: 0.56,
    a: 1.0,
};

/// Avatar ring color for away users
const AWAY_RING: Color = Color {
    r: 0.86,
    g: 0.21,
    b: 0.18,
    a: 1.0,
};

/// Muted color for secondary text and away users' names
const MUTED_TEXT: Color = Color {
    r: 0.62,
    g: 0.62,
    b: 0.62,
    a: 1.0,
};

/// One clickable row in the user list: small avatar, name, presence label
pub fn profile_card<'a>(
    profile: &'a UserProfile,
    avatar: Option<&image::Handle>,
    on_press: Message,
) -> Element<'a, Message> {
    let content = row![
        profile_picture(profile, avatar, 72.0),
        profile_content(profile, Alignment::Start),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill);

    button(content)
        .style(button::secondary)
        .padding(8)
        .width(Length::Fill)
        .on_press(on_press)
        .into()
}

/// The detail screen body: large centered avatar over the text block,
/// plus a last-seen line for users who are away
pub fn profile_details<'a>(
    profile: &'a UserProfile,
    avatar: Option<&image::Handle>,
) -> Element<'a, Message> {
    let presence = if profile.is_online {
        "Active now".to_string()
    } else {
        format!("Last seen {}", profile.last_seen.format("%b %e, %H:%M UTC"))
    };

    column![
        profile_picture(profile, avatar, 240.0),
        profile_content(profile, Alignment::Center),
        text(presence).size(14).color(MUTED_TEXT),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .spacing(8)
    .padding(24)
    .into()
}

/// Circular avatar with a presence ring (green = online, red = away).
///
/// Until the avatar has resolved, the user's initial stands in so the
/// list keeps its layout while fetches are in flight.
fn profile_picture<'a>(
    profile: &UserProfile,
    avatar: Option<&image::Handle>,
    size: f32,
) -> Element<'a, Message> {
    let ring = if profile.is_online {
        ONLINE_RING
    } else {
        AWAY_RING
    };

    let picture: Element<'a, Message> = match avatar {
        Some(handle) => image(handle.clone()).width(size).height(size).into(),
        None => {
            let initial = profile.name.chars().next().unwrap_or('?');
            container(text(initial.to_string()).size(size * 0.4))
                .center_x(size)
                .center_y(size)
                .into()
        }
    };

    container(picture)
        .padding(4)
        .style(move |_theme| container::Style {
            border: Border {
                color: ring,
                width: 2.0,
                radius: size.into(),
            },
            ..container::Style::default()
        })
        .into()
}

/// Name over presence label, aligned per screen
/// (start-aligned on the list, centered on the detail screen)
fn profile_content<'a>(profile: &'a UserProfile, align: Alignment) -> Element<'a, Message> {
    let mut name = text(profile.name.as_str()).size(24);
    if !profile.is_online {
        name = name.color(MUTED_TEXT);
    }

    let status = text(profile.status_label()).size(14).color(if profile.is_online {
        ONLINE_RING
    } else {
        AWAY_RING
    });

    column![name, status]
        .spacing(2)
        .padding(8)
        .align_x(align)
        .into()
}

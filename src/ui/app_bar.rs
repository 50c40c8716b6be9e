use iced::widget::{button, container, text, Row};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Top bar shown on both screens.
///
/// The list screen gets a home glyph; the detail screen swaps it for a
/// back button that reports `Message::BackPressed`.
pub fn app_bar(title: &str, can_go_back: bool) -> Element<'_, Message> {
    let mut bar = Row::new().spacing(8).padding(12).align_y(Alignment::Center);

    if can_go_back {
        bar = bar.push(
            button(text("←").size(20))
                .style(button::text)
                .on_press(Message::BackPressed),
        );
    } else {
        bar = bar.push(text("⌂").size(20));
    }

    bar = bar.push(text(title).size(20));

    container(bar)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

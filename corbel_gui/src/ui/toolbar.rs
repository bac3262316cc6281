//! Toolbar component
//!
//! Contains the calculation and export buttons.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with title
pub fn view_header(window_title: &str) -> Element<'_, Message> {
    row![
        text("Corbel Check").size(28),
        Space::new().width(Length::Fill),
        text(window_title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar; Export is enabled once a result exists
pub fn view_toolbar(can_export: bool) -> Element<'static, Message> {
    row![
        button(text("Run calculation").size(11))
            .on_press(Message::Calculate)
            .padding(Padding::from([4, 8]))
            .style(button::primary),
        button(text("Reset defaults").size(11))
            .on_press(Message::ResetDefaults)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
        button(text("Export results").size(11))
            .on_press_maybe(can_export.then_some(Message::Export))
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

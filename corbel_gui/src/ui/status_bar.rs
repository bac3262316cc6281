//! Status Bar (Bottom)
//!
//! Displays the last status message and the most recent export file.

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(status: &'a str, last_export: Option<&'a Path>) -> Element<'a, Message> {
    let export_info = match last_export {
        Some(path) => format!("Last export: {}", path.display()),
        None => "No export yet".to_string(),
    };

    row![
        text(export_info).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}

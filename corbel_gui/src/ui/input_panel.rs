//! Input Panel (Left)
//!
//! Two columns of numeric fields pre-filled with the default corbel, plus
//! the label used in exports.

use iced::widget::{column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use crate::form::Field;
use crate::{App, Message};

/// Render the input panel
///
/// The `ratio` parameter is this panel's share of the width (0.4 = 40%).
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let left = Field::LEFT
        .iter()
        .fold(Column::new().spacing(6), |col, &field| col.push(field_input(app, field)));
    let right = Field::RIGHT
        .iter()
        .fold(Column::new().spacing(6), |col, &field| col.push(field_input(app, field)));

    let panel = column![
        text("Corbel parameters").size(14),
        Space::new().height(8),
        labeled_input("Label:", &app.fields.label, Message::LabelChanged),
        Space::new().height(8),
        row![left.width(Length::FillPortion(1)), right.width(Length::FillPortion(1))].spacing(12),
        Space::new().height(12),
        text("Values are evaluated when you press 'Run calculation'.")
            .size(10)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(4);

    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// One numeric field with its label stacked above
fn field_input(app: &App, field: Field) -> Element<'_, Message> {
    column![
        text(field.label()).size(11),
        text_input("", app.fields.get(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .on_submit(Message::Calculate)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .spacing(2)
    .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(60.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

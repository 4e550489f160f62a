//! Filter bar view component: date and type chips, reset, counts.

use chatfeed_core::FilterState;
use iced::widget::{button, container, row, text};
use iced::{Background, Border, Element, Length};

use crate::message::{DateToggle, Message, TypeToggle};
use crate::style::palette;
use crate::style::secondary_button_style;

/// Renders the filter bar.
///
/// Chips OR together within a facet; `shown`/`total` feed the
/// "N of M messages" readout.
pub fn view_filters(filters: &FilterState, shown: usize, total: usize) -> Element<'static, Message> {
    let date = &filters.date;
    let date_chips = row![
        view_chip("Today", date.today, Message::ToggleDateFilter(DateToggle::Today)),
        view_chip(
            "Yesterday",
            date.yesterday,
            Message::ToggleDateFilter(DateToggle::Yesterday)
        ),
        view_chip(
            "This Week",
            date.this_week,
            Message::ToggleDateFilter(DateToggle::ThisWeek)
        ),
        view_chip("Older", date.older, Message::ToggleDateFilter(DateToggle::Older)),
    ]
    .spacing(6);

    let types = &filters.message_type;
    let type_chips = row![
        view_chip("Bot", types.bot, Message::ToggleTypeFilter(TypeToggle::Bot)),
        view_chip(
            "Customer",
            types.customer,
            Message::ToggleTypeFilter(TypeToggle::Customer)
        ),
        view_chip(
            "Business",
            types.business,
            Message::ToggleTypeFilter(TypeToggle::Business)
        ),
        view_chip(
            "Deleted",
            types.deleted,
            Message::ToggleTypeFilter(TypeToggle::Deleted)
        ),
    ]
    .spacing(6);

    let reset_btn = button(text("Reset").size(12))
        .padding([6, 12])
        .style(secondary_button_style)
        .on_press(Message::ResetFilters);

    let counts = text(format!("{shown} of {total} messages"))
        .size(12)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        });

    let spacer = iced::widget::Space::new().width(Length::Fill);

    let bar = row![date_chips, type_chips, reset_btn, spacer, counts]
        .spacing(16)
        .padding([8, 20])
        .align_y(iced::Alignment::Center);

    container(bar).width(Length::Fill).into()
}

/// Creates a filter chip button.
fn view_chip(label: &str, is_active: bool, on_press: Message) -> Element<'static, Message> {
    button(text(label.to_owned()).size(12))
        .padding([6, 12])
        .style(move |_theme, status| {
            let p = palette::current();
            let (bg, text_color, border_color) = if is_active {
                (p.primary, p.text_on_primary, p.primary)
            } else {
                match status {
                    button::Status::Hovered => (p.hover, p.text_primary, p.border_medium),
                    _ => (p.surface, p.text_secondary, p.border_subtle),
                }
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color,
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                ..Default::default()
            }
        })
        .on_press(on_press)
        .into()
}

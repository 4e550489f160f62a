//! Header/toolbar view component.

use iced::widget::{Row, button, container, row, text, text_input};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::palette::{self, ThemeMode};
use crate::style::{header_style, search_input_style, secondary_button_style};

/// Renders the application header: title, search input, refresh and theme
/// toggle.
pub fn view_header(search_query: &str, theme_mode: ThemeMode) -> Element<'static, Message> {
    let title = text("ChatFeed")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let search = text_input("Search messages...", search_query)
        .width(Length::Fixed(280.0))
        .padding([10, 16])
        .style(search_input_style)
        .on_input(Message::SearchQueryChanged);

    let refresh_btn = button(text("\u{21BB}").size(18).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .padding([8, 12])
    .style(secondary_button_style)
    .on_press(Message::Refetch);

    let theme_icon = match theme_mode {
        ThemeMode::Light => "\u{263E}", // moon: switch to dark
        ThemeMode::Dark => "\u{2600}",  // sun: switch to light
    };
    let theme_btn = button(text(theme_icon).size(18).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .padding([8, 12])
    .style(secondary_button_style)
    .on_press(Message::ToggleTheme);

    let spacer = iced::widget::Space::new().width(Length::Fill);

    let header_content: Row<'_, Message> = row![title, spacer, search, refresh_btn, theme_btn]
        .spacing(12)
        .padding([12, 20])
        .align_y(iced::Alignment::Center);

    container(header_content)
        .width(Length::Fill)
        .style(header_style)
        .into()
}

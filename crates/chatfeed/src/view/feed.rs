//! Message feed view: grouped list, loading/error/empty states.

use chatfeed_core::{ChatMessage, DateGroup, FilteredFeed, match_spans};
use chrono::Local;
use iced::widget::{Column, Row, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::palette;
use crate::style::{
    feed_style, message_button_style, message_row_active_style, message_row_style,
    primary_button_style, scrollable_style,
};

/// Renders the message feed panel.
///
/// `active` and `copied` are flattened-list positions from the navigator;
/// `has_messages` distinguishes "nothing fetched" from "filters exclude
/// everything".
pub fn view_feed(
    feed: &FilteredFeed,
    query: &str,
    active: Option<usize>,
    copied: Option<usize>,
    is_loading: bool,
    error: Option<&str>,
    has_messages: bool,
) -> Element<'static, Message> {
    if is_loading {
        return centered_state(
            column![
                text("\u{23F3}").size(48),
                muted_text("Loading messages...", 16),
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        );
    }

    if let Some(error) = error {
        let retry_btn = button(text("Retry").size(14))
            .padding([10, 20])
            .style(primary_button_style)
            .on_press(Message::Refetch);

        return centered_state(
            column![
                text("Could not load messages").size(16).style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.accent_red),
                    }
                }),
                muted_text(error, 13),
                retry_btn,
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        );
    }

    if feed.is_empty() {
        let (headline, hint) = if has_messages {
            ("No messages match", "Adjust the filters or the search query")
        } else {
            ("No messages", "The conversation is empty")
        };
        return centered_state(
            column![
                text("\u{1F4ED}").size(48),
                muted_text(headline, 16),
                muted_text(hint, 13),
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        );
    }

    let mut list = Column::new().spacing(8).padding([16, 20]);
    let mut flat_index = 0;
    for group in &feed.groups {
        list = list.push(group_header(group));
        for message in &group.messages {
            let is_active = active == Some(flat_index);
            let is_copied = copied == Some(flat_index);
            list = list.push(message_card(message, flat_index, query, is_active, is_copied));
            flat_index += 1;
        }
    }

    container(
        scrollable(list.width(Length::Fill))
            .style(scrollable_style)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(feed_style)
    .into()
}

/// Date-bucket header: label plus the canonical day key.
fn group_header(group: &DateGroup) -> Element<'static, Message> {
    let label = text(group.label.clone())
        .size(13)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        });

    row![label, muted_text(&group.key, 11)]
        .spacing(8)
        .padding([8, 0])
        .align_y(iced::Alignment::Center)
        .into()
}

/// One message card: sender badge, time, body with search emphasis.
fn message_card(
    message: &ChatMessage,
    flat_index: usize,
    query: &str,
    is_active: bool,
    is_copied: bool,
) -> Element<'static, Message> {
    let sender = message.sender().display_name();
    let badge = container(text(sender).size(11).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .padding([2, 8])
    .style(|_theme| {
        let p = palette::current();
        container::Style {
            background: Some(iced::Background::Color(p.surface_elevated)),
            border: iced::Border {
                color: p.border_subtle,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    });

    let time = message
        .message_date
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    let mut meta = row![badge, muted_text(&time, 11)]
        .spacing(8)
        .align_y(iced::Alignment::Center);

    if message.is_deleted {
        meta = meta.push(muted_text("deleted", 11));
    }

    if is_copied {
        meta = meta.push(iced::widget::Space::new().width(Length::Fill));
        meta = meta.push(text("Copied").size(11).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.accent_green),
            }
        }));
    }

    let card = container(
        column![meta, highlighted_body(&message.message_text, query)]
            .spacing(6)
            .width(Length::Fill),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(if is_active {
        message_row_active_style
    } else {
        message_row_style
    });

    button(card)
        .padding(0)
        .width(Length::Fill)
        .style(message_button_style)
        .on_press(Message::SelectMessage(flat_index))
        .into()
}

/// Message body with the search matches emphasized, original casing kept.
fn highlighted_body(body: &str, query: &str) -> Element<'static, Message> {
    let spans = match_spans(body, query);
    if spans.is_empty() {
        return text(body.to_owned()).size(14).into();
    }

    let mut segments: Row<'static, Message> = Row::new().align_y(iced::Alignment::Center);
    let mut cursor = 0;
    for span in spans {
        if cursor < span.start {
            segments = segments.push(text(body[cursor..span.start].to_owned()).size(14));
        }
        segments = segments.push(
            text(body[span.clone()].to_owned())
                .size(14)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                })
                .style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.primary),
                    }
                }),
        );
        cursor = span.end;
    }
    if cursor < body.len() {
        segments = segments.push(text(body[cursor..].to_owned()).size(14));
    }
    segments.into()
}

/// Full-panel centered state (loading, error, empty).
fn centered_state(content: Column<'static, Message>) -> Element<'static, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(feed_style)
        .into()
}

/// Secondary-colored text helper.
fn muted_text(content: &str, size: u32) -> Element<'static, Message> {
    text(content.to_owned())
        .size(size)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        })
        .into()
}

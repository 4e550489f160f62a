//! Widget style functions with theme support.

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color};

use super::palette;

/// Rounded corner radii.
pub mod radius {
    /// No rounding.
    pub const NONE: f32 = 0.0;
    /// Minimal rounding.
    pub const SMALL: f32 = 4.0;
    /// Subtle rounding.
    pub const MEDIUM: f32 = 6.0;
}

/// Header bar style with a subtle bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Feed panel style.
pub fn feed_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Message row - resting state.
pub fn message_row_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Message row - active (keyboard cursor) state.
pub fn message_row_active_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.selected)),
        border: Border {
            color: p.selected_border,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Primary button style (retry, reset).
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.primary)),
        text_color: p.text_on_primary,
        border: Border {
            color: p.primary_light,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_light)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.text_muted)),
            text_color: p.surface,
            ..base
        },
    }
}

/// Secondary/ghost button style (toolbar buttons).
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.border_subtle,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            ..base
        },
    }
}

/// Transparent button wrapping a message card.
pub fn message_button_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: palette::current().text_primary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Search input style.
pub fn search_input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();

    let base = text_input::Style {
        background: Background::Color(p.surface_elevated),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: p.text_primary,
        selection: p.selected,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: p.border_medium,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: p.primary,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            value: p.text_muted,
            ..base
        },
    }
}

/// Scrollable style.
pub fn scrollable_style(_theme: &iced::Theme, status: scrollable::Status) -> scrollable::Style {
    let p = palette::current();

    let scroller_border = Border {
        color: Color::TRANSPARENT,
        width: 0.0,
        radius: radius::SMALL.into(),
    };

    let base = scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollable::Rail {
            background: Some(Background::Color(Color::TRANSPARENT)),
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(p.border_medium),
                border: scroller_border,
            },
        },
        horizontal_rail: scrollable::Rail {
            background: Some(Background::Color(Color::TRANSPARENT)),
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(p.border_medium),
                border: scroller_border,
            },
        },
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(p.surface),
            border: Border::default(),
            shadow: iced::Shadow::default(),
            icon: p.text_muted,
        },
    };

    match status {
        scrollable::Status::Active { .. } => base,
        scrollable::Status::Hovered { .. } | scrollable::Status::Dragged { .. } => {
            let mut style = base;
            style.vertical_rail.scroller.background = Background::Color(p.primary_light);
            style
        }
    }
}

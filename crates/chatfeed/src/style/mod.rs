//! Styling and theming for the application.

pub mod palette;
mod widgets;

pub use widgets::{
    feed_style, header_style, message_button_style, message_row_active_style, message_row_style,
    primary_button_style, scrollable_style, search_input_style, secondary_button_style,
};

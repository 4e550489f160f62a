//! View components for the application.

mod feed;
mod filters;
mod header;

pub use feed::view_feed;
pub use filters::view_filters;
pub use header::view_header;

//! # chatfeed-core
//!
//! Core message-feed engine for the `ChatFeed` desktop client.
//!
//! This crate provides:
//! - Domain models for business/customer/bot chat messages (wire shape)
//! - Date-bucket grouping with an injected "today" for determinism
//! - The filter/search pipeline (date facet, sender-type facet, substring search)
//! - A keyboard navigation cursor over the flattened filtered list
//! - The message fetch service
//!
//! Everything except the fetch service is pure data processing: the same
//! inputs always produce the same outputs, and nothing here touches the
//! wall clock, the network, or the clipboard.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod feed;
pub mod service;

pub use error::{Error, Result};
pub use feed::{
    ChatMessage, DateFilter, DateGroup, FilterState, FilteredFeed, Navigator, Sender, TypeFilter,
    apply_filters, group_messages, match_spans,
};
pub use service::fetch_messages;

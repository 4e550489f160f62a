//! The message feed engine.
//!
//! Data flows one way: raw messages go through [`group_messages`] to become
//! date buckets, [`apply_filters`] reduces those buckets to a
//! [`FilteredFeed`], and a [`Navigator`] tracks one active position over the
//! flattened result.

mod filter;
mod group;
mod highlight;
mod model;
mod navigate;

pub use filter::{DateFilter, FilterState, FilteredFeed, TypeFilter, apply_filters};
pub use group::group_messages;
pub use highlight::match_spans;
pub use model::{ChatMessage, DateGroup, Sender};
pub use navigate::Navigator;

//! Domain models for the message feed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A single chat message as delivered by the endpoint.
///
/// Field names match the JSON wire format; the record is immutable from the
/// engine's perspective. A malformed `message_date` fails deserialization of
/// the containing batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatMessage {
    /// Identifier of the business account.
    pub business_id: i64,
    /// Identifier of the customer on the other end.
    pub customer: i64,
    /// Social-platform identifier of the business.
    pub business_social_id: i64,
    /// The message body, used for search and display.
    pub message_text: String,
    /// When the message was sent (RFC 3339 on the wire). All date-bucket
    /// decisions derive from this instant.
    pub message_date: DateTime<Utc>,
    /// Origin channel, opaque to the engine (e.g. "facebook").
    pub platform: String,
    /// Whether the bot sent this message.
    pub bot_sender: bool,
    /// Whether the customer sent this message.
    pub sent_by_customer: bool,
    /// Whether the message was deleted.
    pub is_deleted: bool,
    /// Whether the customer has read the message.
    pub read_by_customer: bool,
    /// Whether the business has read the message.
    pub read_by_business: bool,
}

impl ChatMessage {
    /// Who sent this message.
    ///
    /// "Business" is the double-negative default: neither bot nor customer.
    /// A record claiming both bot and customer is a caller contract
    /// violation; this resolves it in favor of the bot flag.
    #[must_use]
    pub const fn sender(&self) -> Sender {
        if self.bot_sender {
            Sender::Bot
        } else if self.sent_by_customer {
            Sender::Customer
        } else {
            Sender::Business
        }
    }
}

/// Message origin, derived from the sender flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// Sent by the automated bot.
    Bot,
    /// Sent by the customer.
    Customer,
    /// Sent by a human at the business.
    Business,
}

impl Sender {
    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Bot => "Bot",
            Self::Customer => "Customer",
            Self::Business => "Business",
        }
    }
}

/// Messages sharing one local calendar day, plus display metadata.
///
/// Groups are rebuilt from scratch whenever the inputs change, never mutated
/// in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    /// The calendar day of this bucket, in local time.
    pub day: NaiveDate,
    /// Canonical "MM-DD-YYYY" key for the day.
    pub key: String,
    /// Human label: "Today", "Yesterday", "This Week" or an absolute date.
    pub label: String,
    /// Messages of the day, ascending by timestamp.
    pub messages: Vec<ChatMessage>,
    /// The bucket is the injected "today".
    pub is_today: bool,
    /// The bucket is the day before "today".
    pub is_yesterday: bool,
    /// The bucket falls in the trailing 7-day window, excluding today and
    /// yesterday. Exactly one of the three flags is set, or none.
    pub is_this_week: bool,
}

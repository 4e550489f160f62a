//! Date-bucket grouping.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};

use super::model::{ChatMessage, DateGroup};

/// Groups messages into local calendar-day buckets.
///
/// Buckets are ordered descending by day (most recent first); messages
/// within a bucket are ordered ascending by timestamp. Labels and recency
/// flags are derived by calendar-day diff against the injected `today`, so
/// output is fully deterministic for a fixed `today` and input set.
///
/// Every message lands in exactly one bucket; empty input yields an empty
/// sequence. Timestamps are assumed valid, since unparseable dates are
/// rejected at deserialization time, never silently dropped here.
#[must_use]
pub fn group_messages(messages: &[ChatMessage], today: NaiveDate) -> Vec<DateGroup> {
    let mut buckets: BTreeMap<NaiveDate, Vec<ChatMessage>> = BTreeMap::new();
    for message in messages {
        let day = message.message_date.with_timezone(&Local).date_naive();
        buckets.entry(day).or_default().push(message.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(day, mut bucket)| {
            // Stable sort: messages truncated to the same minute keep their
            // relative order.
            bucket.sort_by_key(|m| m.message_date);

            let age = (today - day).num_days();
            DateGroup {
                day,
                key: day.format("%m-%d-%Y").to_string(),
                label: day_label(day, today),
                messages: bucket,
                is_today: age == 0,
                is_yesterday: age == 1,
                is_this_week: (2..=6).contains(&age),
            }
        })
        .collect()
}

/// Human label for a calendar day relative to `today`.
fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    match (today - day).num_days() {
        0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        2..=6 => "This Week".to_owned(),
        _ => format!("{} {}, {}", day.format("%B"), day.day(), day.year()),
    }
}

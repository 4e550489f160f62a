//! The filter/search pipeline.
//!
//! Facets combine with AND across facets and OR within a facet's active
//! toggles. The pipeline is a pure function of (groups, filters, query):
//! recomputation is idempotent and never mutates its inputs.

use super::model::{ChatMessage, DateGroup};

/// Date-bucket facet toggles.
///
/// When no toggle is set, every bucket passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    /// Show the "Today" bucket.
    pub today: bool,
    /// Show the "Yesterday" bucket.
    pub yesterday: bool,
    /// Show "This Week" buckets.
    pub this_week: bool,
    /// Show everything older than the trailing week.
    pub older: bool,
}

impl DateFilter {
    const fn any(self) -> bool {
        self.today || self.yesterday || self.this_week || self.older
    }

    /// Whether a group passes this facet.
    ///
    /// "This Week" and "Older" are guarded against the today/yesterday flags
    /// so the four toggles select disjoint ranges even if the raw flags were
    /// ever to overlap.
    #[must_use]
    pub fn matches(self, group: &DateGroup) -> bool {
        if !self.any() {
            return true;
        }
        (self.today && group.is_today)
            || (self.yesterday && group.is_yesterday)
            || (self.this_week && group.is_this_week && !group.is_today && !group.is_yesterday)
            || (self.older && !group.is_today && !group.is_yesterday && !group.is_this_week)
    }
}

/// Sender-type facet toggles.
///
/// When no toggle is set, every message passes. Deleted messages are the
/// exception: they are opt-in only and never included by the "all pass"
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeFilter {
    /// Show bot messages.
    pub bot: bool,
    /// Show customer messages.
    pub customer: bool,
    /// Show business messages (neither bot nor customer).
    pub business: bool,
    /// Show deleted messages.
    pub deleted: bool,
}

impl TypeFilter {
    const fn any(self) -> bool {
        self.bot || self.customer || self.business || self.deleted
    }

    /// Whether a message passes this facet. Predicates are OR'd: matching
    /// any active toggle suffices.
    #[must_use]
    pub fn matches(self, message: &ChatMessage) -> bool {
        if message.is_deleted && !self.deleted {
            return false;
        }
        if !self.any() {
            return true;
        }
        (self.deleted && message.is_deleted)
            || (self.bot && message.bot_sender)
            || (self.customer && message.sent_by_customer)
            || (self.business && !message.bot_sender && !message.sent_by_customer)
    }
}

/// Both facets of the filter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    /// The date-bucket facet.
    pub date: DateFilter,
    /// The sender-type facet.
    pub message_type: TypeFilter,
}

impl FilterState {
    /// Restores the default state: everything passes, deleted excluded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Result of a filter pass: the surviving groups plus the total number of
/// surviving messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredFeed {
    /// Surviving groups, each holding only its surviving messages. A group
    /// left with zero messages is dropped entirely.
    pub groups: Vec<DateGroup>,
    /// Sum of surviving message counts across all groups.
    pub count: usize,
}

impl FilteredFeed {
    /// Number of messages in the flattened list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Whether the flattened list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Unrolls the groups into the linear sequence the navigator addresses:
    /// group by group, within-group order preserved.
    pub fn flatten(&self) -> impl Iterator<Item = &ChatMessage> {
        self.groups.iter().flat_map(|g| g.messages.iter())
    }

    /// The message at a flattened-list position, if in range.
    #[must_use]
    pub fn message_at(&self, index: usize) -> Option<&ChatMessage> {
        self.flatten().nth(index)
    }
}

/// Applies the date facet, the sender-type facet and the substring search.
///
/// The query is trimmed and matched case-insensitively; an empty or
/// whitespace-only query passes everything. Groups survive only if at least
/// one of their messages does.
#[must_use]
pub fn apply_filters(groups: &[DateGroup], filters: &FilterState, query: &str) -> FilteredFeed {
    let needle = query.trim().to_lowercase();

    let mut surviving = Vec::new();
    let mut count = 0;
    for group in groups {
        if !filters.date.matches(group) {
            continue;
        }
        let messages: Vec<ChatMessage> = group
            .messages
            .iter()
            .filter(|m| filters.message_type.matches(m))
            .filter(|m| needle.is_empty() || m.message_text.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        if messages.is_empty() {
            continue;
        }
        count += messages.len();
        let mut kept = group.clone();
        kept.messages = messages;
        surviving.push(kept);
    }

    FilteredFeed {
        groups: surviving,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::group_messages;
    use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

    fn message(text: &str, local_time: DateTime<Local>, bot: bool, customer: bool) -> ChatMessage {
        ChatMessage {
            business_id: 1,
            customer: 7,
            business_social_id: 100,
            message_text: text.to_owned(),
            message_date: local_time.with_timezone(&Utc),
            platform: "facebook".to_owned(),
            bot_sender: bot,
            sent_by_customer: customer,
            is_deleted: false,
            read_by_customer: false,
            read_by_business: true,
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn sample_groups() -> Vec<DateGroup> {
        let mut deleted = message("old secret", at(2025, 6, 15, 8), false, true);
        deleted.is_deleted = true;
        let messages = vec![
            message("please refund me", at(2025, 6, 15, 10), false, true),
            message("Refund issued", at(2025, 6, 15, 11), false, false),
            message("thanks", at(2025, 6, 14, 9), false, true),
            message("automated reply", at(2025, 6, 11, 9), true, false),
            message("ancient history", at(2025, 5, 1, 9), false, false),
            deleted,
        ];
        group_messages(&messages, today())
    }

    #[test]
    fn test_no_filters_pass_all_but_deleted() {
        let feed = apply_filters(&sample_groups(), &FilterState::default(), "");
        assert_eq!(feed.count, 5);
        assert!(feed.flatten().all(|m| !m.is_deleted));
    }

    #[test]
    fn test_bot_toggle_selects_only_bot() {
        let filters = FilterState {
            message_type: TypeFilter {
                bot: true,
                ..TypeFilter::default()
            },
            ..FilterState::default()
        };
        let feed = apply_filters(&sample_groups(), &filters, "");
        assert_eq!(feed.count, 1);
        assert_eq!(feed.message_at(0).unwrap().message_text, "automated reply");
    }

    #[test]
    fn test_deleted_is_opt_in() {
        let filters = FilterState {
            message_type: TypeFilter {
                deleted: true,
                ..TypeFilter::default()
            },
            ..FilterState::default()
        };
        let feed = apply_filters(&sample_groups(), &filters, "");
        assert_eq!(feed.count, 1);
        assert!(feed.message_at(0).unwrap().is_deleted);
    }

    #[test]
    fn test_type_toggles_or_together() {
        let filters = FilterState {
            message_type: TypeFilter {
                bot: true,
                customer: true,
                ..TypeFilter::default()
            },
            ..FilterState::default()
        };
        let feed = apply_filters(&sample_groups(), &filters, "");
        // Two customer messages plus the bot one; deleted stays out.
        assert_eq!(feed.count, 3);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let feed = apply_filters(&sample_groups(), &FilterState::default(), "refund");
        assert_eq!(feed.count, 2);

        let trimmed = apply_filters(&sample_groups(), &FilterState::default(), "  REFUND  ");
        assert_eq!(trimmed.count, 2);

        let whitespace = apply_filters(&sample_groups(), &FilterState::default(), "   ");
        assert_eq!(whitespace.count, 5);
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let feed = apply_filters(&sample_groups(), &FilterState::default(), "refund");
        assert_eq!(feed.groups.len(), 1);
        assert!(feed.groups.iter().all(|g| !g.messages.is_empty()));
    }

    #[test]
    fn test_this_week_excludes_today_and_yesterday() {
        let filters = FilterState {
            date: DateFilter {
                this_week: true,
                ..DateFilter::default()
            },
            ..FilterState::default()
        };
        let feed = apply_filters(&sample_groups(), &filters, "");
        assert_eq!(feed.count, 1);
        assert_eq!(feed.message_at(0).unwrap().message_text, "automated reply");
    }

    #[test]
    fn test_older_excludes_trailing_week() {
        let filters = FilterState {
            date: DateFilter {
                older: true,
                ..DateFilter::default()
            },
            ..FilterState::default()
        };
        let feed = apply_filters(&sample_groups(), &filters, "");
        assert_eq!(feed.count, 1);
        assert_eq!(feed.message_at(0).unwrap().message_text, "ancient history");
    }

    #[test]
    fn test_facets_combine_with_and() {
        let filters = FilterState {
            date: DateFilter {
                today: true,
                ..DateFilter::default()
            },
            message_type: TypeFilter {
                customer: true,
                ..TypeFilter::default()
            },
        };
        let feed = apply_filters(&sample_groups(), &filters, "");
        assert_eq!(feed.count, 1);
        assert_eq!(feed.message_at(0).unwrap().message_text, "please refund me");
    }

    #[test]
    fn test_idempotent() {
        let filters = FilterState {
            date: DateFilter {
                today: true,
                yesterday: true,
                ..DateFilter::default()
            },
            ..FilterState::default()
        };
        let once = apply_filters(&sample_groups(), &filters, "re");
        let twice = apply_filters(&once.groups, &filters, "re");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_all_pass_default_admits_more_than_one_toggle() {
        // An all-false facet means "everything passes", so activating a
        // single toggle narrows the result rather than widening it.
        let all = apply_filters(&sample_groups(), &FilterState::default(), "");
        let business_only = FilterState {
            message_type: TypeFilter {
                business: true,
                ..TypeFilter::default()
            },
            ..FilterState::default()
        };
        let feed = apply_filters(&sample_groups(), &business_only, "");
        assert_eq!(feed.count, 2);
        assert!(feed.count < all.count);
    }

    #[test]
    fn test_enabling_toggles_never_shrinks_count() {
        let base = FilterState {
            message_type: TypeFilter {
                bot: true,
                ..TypeFilter::default()
            },
            ..FilterState::default()
        };
        let wider = FilterState {
            message_type: TypeFilter {
                bot: true,
                customer: true,
                business: true,
                ..TypeFilter::default()
            },
            ..FilterState::default()
        };
        let narrow = apply_filters(&sample_groups(), &base, "");
        let wide = apply_filters(&sample_groups(), &wider, "");
        assert!(wide.count >= narrow.count);
    }

    #[test]
    fn test_flatten_preserves_group_order() {
        let feed = apply_filters(&sample_groups(), &FilterState::default(), "");
        let texts: Vec<_> = feed.flatten().map(|m| m.message_text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "please refund me",
                "Refund issued",
                "thanks",
                "automated reply",
                "ancient history",
            ]
        );
        assert_eq!(texts.len(), feed.len());
    }
}

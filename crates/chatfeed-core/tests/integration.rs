//! Integration tests for the message feed engine.
//!
//! These drive the full pipeline the way the GUI does: deserialize a batch,
//! group it against an injected "today", filter it, and navigate the
//! flattened result.

use chatfeed_core::{
    ChatMessage, FilterState, Navigator, TypeFilter, apply_filters, group_messages,
};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

fn message(text: &str, local_time: DateTime<Local>) -> ChatMessage {
    ChatMessage {
        business_id: 1,
        customer: 7,
        business_social_id: 100,
        message_text: text.to_owned(),
        message_date: local_time.with_timezone(&Utc),
        platform: "facebook".to_owned(),
        bot_sender: false,
        sent_by_customer: true,
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

#[test]
fn batch_to_groups_end_to_end() {
    let body = r#"[
        {
            "business_id": 3,
            "customer": 42,
            "business_social_id": 9001,
            "message_text": "please refund me",
            "message_date": "2025-06-15T10:00:00Z",
            "platform": "facebook",
            "bot_sender": false,
            "sent_by_customer": true,
            "is_deleted": false,
            "read_by_customer": true,
            "read_by_business": false
        },
        {
            "business_id": 3,
            "customer": 42,
            "business_social_id": 9001,
            "message_text": "Refund issued",
            "message_date": "2025-06-15T11:30:00Z",
            "platform": "facebook",
            "bot_sender": false,
            "sent_by_customer": false,
            "is_deleted": false,
            "read_by_customer": false,
            "read_by_business": true
        }
    ]"#;

    let messages: Vec<ChatMessage> = serde_json::from_str(body).unwrap();
    let day = messages[0].message_date.with_timezone(&Local).date_naive();
    let groups = group_messages(&messages, day);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label, "Today");
    assert_eq!(groups[0].messages.len(), 2);

    let feed = apply_filters(&groups, &FilterState::default(), "refund");
    assert_eq!(feed.count, 2);
}

#[test]
fn filter_then_navigate_then_replace() {
    let messages = vec![
        message("first", at(2025, 6, 15, 9)),
        message("second", at(2025, 6, 15, 10)),
        message("third", at(2025, 6, 14, 20)),
    ];
    let groups = group_messages(&messages, today());
    let feed = apply_filters(&groups, &FilterState::default(), "");
    assert_eq!(feed.len(), 3);

    let mut nav = Navigator::new();
    nav.replace_list(feed.len());
    nav.move_next();
    nav.move_next();
    nav.move_next();
    nav.move_next();
    assert_eq!(nav.active(), Some(2));
    assert_eq!(feed.message_at(2).unwrap().message_text, "third");

    // A filter pass that excludes everything replaces the list; the cursor
    // resets rather than keeping a stale index.
    let empty = apply_filters(&groups, &FilterState::default(), "no such text");
    assert!(empty.is_empty());
    nav.replace_list(empty.len());
    assert_eq!(nav.active(), None);
    nav.move_next();
    assert_eq!(nav.active(), None);
}

#[test]
fn activate_copies_the_active_message() {
    let messages = vec![
        message("copy me", at(2025, 6, 15, 9)),
        message("not me", at(2025, 6, 15, 10)),
    ];
    let groups = group_messages(&messages, today());
    let feed = apply_filters(&groups, &FilterState::default(), "");

    let mut nav = Navigator::new();
    nav.replace_list(feed.len());
    nav.move_next();

    let index = nav.activate().unwrap();
    assert_eq!(feed.message_at(index).unwrap().message_text, "copy me");
    assert_eq!(nav.copied(), Some(index));
    nav.clear_copied();
    assert_eq!(nav.copied(), None);
}

#[test]
fn bot_toggle_matches_only_bot_messages() {
    let mut bot = message("beep", at(2025, 6, 15, 9));
    bot.bot_sender = true;
    bot.sent_by_customer = false;
    let mut business = message("hello", at(2025, 6, 15, 11));
    business.sent_by_customer = false;
    let customer = message("hi", at(2025, 6, 15, 10));

    let groups = group_messages(&[bot, customer, business], today());
    let filters = FilterState {
        message_type: TypeFilter {
            bot: true,
            ..TypeFilter::default()
        },
        ..FilterState::default()
    };
    let feed = apply_filters(&groups, &filters, "");
    assert_eq!(feed.count, 1);
    assert_eq!(feed.message_at(0).unwrap().message_text, "beep");
}

fn arb_message() -> impl Strategy<Value = ChatMessage> {
    (
        0i64..3_000_000,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        "[a-zA-Z ]{0,24}",
    )
        .prop_map(|(offset, bot, customer, deleted, text)| {
            let base = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
            ChatMessage {
                business_id: 1,
                customer: 7,
                business_social_id: 100,
                message_text: text,
                message_date: base - Duration::seconds(offset),
                platform: "facebook".to_owned(),
                bot_sender: bot,
                sent_by_customer: customer && !bot,
                is_deleted: deleted,
                read_by_customer: false,
                read_by_business: true,
            }
        })
}

proptest! {
    #[test]
    fn grouping_partitions_the_input(messages in proptest::collection::vec(arb_message(), 0..40)) {
        let groups = group_messages(&messages, today());

        let mut grouped: Vec<(DateTime<Utc>, String)> = groups
            .iter()
            .flat_map(|g| g.messages.iter())
            .map(|m| (m.message_date, m.message_text.clone()))
            .collect();
        let mut input: Vec<(DateTime<Utc>, String)> = messages
            .iter()
            .map(|m| (m.message_date, m.message_text.clone()))
            .collect();
        grouped.sort();
        input.sort();
        prop_assert_eq!(grouped, input);
    }

    #[test]
    fn groups_descend_and_messages_ascend(messages in proptest::collection::vec(arb_message(), 0..40)) {
        let groups = group_messages(&messages, today());
        for pair in groups.windows(2) {
            prop_assert!(pair[0].day > pair[1].day);
        }
        for group in &groups {
            for pair in group.messages.windows(2) {
                prop_assert!(pair[0].message_date <= pair[1].message_date);
            }
        }
    }

    #[test]
    fn widening_the_type_facet_is_monotone(
        messages in proptest::collection::vec(arb_message(), 0..40),
        bot in any::<bool>(),
        customer in any::<bool>(),
    ) {
        // Monotonicity holds over supersets of *active* toggles. An all-false
        // facet is not a subset of {business}: it means "everything passes".
        prop_assume!(bot || customer);

        let groups = group_messages(&messages, today());
        let narrow = FilterState {
            message_type: TypeFilter { bot, customer, ..TypeFilter::default() },
            ..FilterState::default()
        };
        let wide = FilterState {
            message_type: TypeFilter { bot, customer, business: true, ..TypeFilter::default() },
            ..FilterState::default()
        };
        let narrow_feed = apply_filters(&groups, &narrow, "");
        let wide_feed = apply_filters(&groups, &wide, "");
        prop_assert!(wide_feed.count >= narrow_feed.count);
    }

    #[test]
    fn search_matches_case_folded_substring(
        messages in proptest::collection::vec(arb_message(), 0..40),
        query in "[a-zA-Z ]{0,6}",
    ) {
        let groups = group_messages(&messages, today());
        let feed = apply_filters(&groups, &FilterState::default(), &query);

        let needle = query.trim().to_lowercase();
        let expected = messages
            .iter()
            .filter(|m| !m.is_deleted)
            .filter(|m| needle.is_empty() || m.message_text.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(feed.count, expected);
    }

    #[test]
    fn navigator_never_leaves_bounds(
        len in 0usize..20,
        ops in proptest::collection::vec(0u8..4, 0..60),
    ) {
        let mut nav = Navigator::new();
        nav.replace_list(len);
        for op in ops {
            match op {
                0 => nav.move_next(),
                1 => nav.move_prev(),
                2 => nav.deselect(),
                _ => {
                    nav.activate();
                }
            }
            if let Some(i) = nav.active() {
                prop_assert!(i < len);
            }
        }
    }
}

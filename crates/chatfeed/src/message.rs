//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use chatfeed_core::ChatMessage;

use crate::settings::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Fetch
    /// Messages arrived from the endpoint (or the fetch failed).
    MessagesLoaded(Result<Vec<ChatMessage>, String>),
    /// Re-run the fetch (manual retry / refresh).
    Refetch,

    // Filtering and search
    /// Search query changed.
    SearchQueryChanged(String),
    /// A date-facet chip was toggled.
    ToggleDateFilter(DateToggle),
    /// A type-facet chip was toggled.
    ToggleTypeFilter(TypeToggle),
    /// Restore default filters and clear the query.
    ResetFilters,

    // Navigation
    /// A message card was clicked.
    SelectMessage(usize),
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// The transient copied marker expired.
    CopiedCleared,

    // Settings
    /// Toggle light/dark theme.
    ToggleTheme,
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved to disk.
    SettingsSaved(Result<(), String>),

    /// Event with no effect (non-shortcut key presses).
    Ignored,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Move the cursor down one message (ArrowDown).
    MoveNext,
    /// Move the cursor up one message (ArrowUp).
    MovePrev,
    /// Copy the active message text (Enter or Ctrl+C).
    Copy,
    /// Clear the active position (Escape).
    Deselect,
    /// Refetch the message list (F5).
    Refresh,
}

/// Date-facet chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToggle {
    /// The "Today" bucket.
    Today,
    /// The "Yesterday" bucket.
    Yesterday,
    /// The trailing week, excluding today and yesterday.
    ThisWeek,
    /// Everything older.
    Older,
}

/// Type-facet chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeToggle {
    /// Bot messages.
    Bot,
    /// Customer messages.
    Customer,
    /// Business messages.
    Business,
    /// Deleted messages (opt-in).
    Deleted,
}

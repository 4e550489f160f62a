//! `ChatFeed` - Desktop viewer for business/customer/bot chat messages
//!
//! Fetches the complete message list from a proxied endpoint, groups it by
//! local calendar day, and lets the user filter, search, navigate with the
//! keyboard, and copy messages. Built with Rust, the iced GUI framework,
//! and the `chatfeed-core` feed engine.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod settings;
mod style;
mod view;

use std::time::Duration;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::column;
use iced::{Element, Length, Subscription, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatfeed_core::{
    ChatMessage, DateGroup, FilterState, FilteredFeed, Navigator, apply_filters, group_messages,
};
use message::{DateToggle, KeyboardAction, Message, TypeToggle};
use settings::AppSettings;
use style::palette::ThemeMode;

/// How long the "Copied" badge stays on a message.
const COPIED_BADGE_DURATION: Duration = Duration::from_millis(1500);

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatfeed=debug,chatfeed_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ChatFeed");

    iced::application(ChatFeed::new, ChatFeed::update, ChatFeed::view)
        .title("ChatFeed")
        .subscription(ChatFeed::subscription)
        .run()
}

/// Main application state.
struct ChatFeed {
    /// Persisted settings (endpoint, theme).
    settings: AppSettings,
    /// Shared HTTP client for fetches.
    http: reqwest::Client,
    /// Complete snapshot from the endpoint (deleted messages included).
    messages: Vec<ChatMessage>,
    /// Date buckets derived from `messages`.
    groups: Vec<DateGroup>,
    /// Current filter pass over `groups`.
    feed: FilteredFeed,
    /// Active filter toggles.
    filters: FilterState,
    /// Search query.
    query: String,
    /// Keyboard cursor over the flattened feed.
    navigator: Navigator,
    /// Whether a fetch is in flight.
    is_loading: bool,
    /// Fetch error to display, if any.
    error_message: Option<String>,
}

impl Default for ChatFeed {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
            http: reqwest::Client::new(),
            messages: Vec::new(),
            groups: Vec::new(),
            feed: FilteredFeed::default(),
            filters: FilterState::default(),
            query: String::new(),
            navigator: Navigator::new(),
            is_loading: true,
            error_message: None,
        }
    }
}

impl ChatFeed {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        // Settings first; the initial fetch is chained off SettingsLoaded so
        // it hits the configured endpoint.
        (
            app,
            Task::perform(load_settings(), Message::SettingsLoaded),
        )
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::palette::set_theme(self.settings.theme_mode);
    }

    /// Rebuilds the date buckets from the current snapshot, then refilters.
    ///
    /// Resamples "today" on every call, so group labels stay correct when
    /// the app is open across midnight: any filter or search interaction
    /// re-buckets against the current date.
    fn regroup(&mut self) {
        let today = chrono::Local::now().date_naive();
        self.groups = group_messages(&self.messages, today);
        self.refilter();
    }

    /// Re-runs the filter/search pipeline and resets the cursor onto the
    /// fresh flattened list.
    fn refilter(&mut self) {
        self.feed = apply_filters(&self.groups, &self.filters, &self.query);
        self.navigator.replace_list(self.feed.len());
    }

    /// Kicks off a fetch against the configured endpoint.
    fn fetch(&mut self) -> Task<Message> {
        self.is_loading = true;
        self.error_message = None;
        let client = self.http.clone();
        let endpoint = self.settings.endpoint.clone();
        Task::perform(load_messages(client, endpoint), Message::MessagesLoaded)
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(loaded) => {
                        info!("Settings loaded: theme={:?}", loaded.theme_mode);
                        self.settings = loaded;
                        self.apply_theme();
                    }
                    Err(e) => {
                        info!("Failed to load settings, using defaults: {}", e);
                    }
                }
                return self.fetch();
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::Refetch => {
                return self.fetch();
            }
            Message::MessagesLoaded(result) => {
                self.is_loading = false;
                match result {
                    Ok(messages) => {
                        info!("Loaded {} messages", messages.len());
                        self.messages = messages;
                        self.regroup();
                    }
                    Err(e) => {
                        warn!("Failed to load messages: {}", e);
                        self.error_message = Some(e);
                    }
                }
            }
            Message::SearchQueryChanged(query) => {
                self.query = query;
                self.regroup();
            }
            Message::ToggleDateFilter(toggle) => {
                let date = &mut self.filters.date;
                match toggle {
                    DateToggle::Today => date.today = !date.today,
                    DateToggle::Yesterday => date.yesterday = !date.yesterday,
                    DateToggle::ThisWeek => date.this_week = !date.this_week,
                    DateToggle::Older => date.older = !date.older,
                }
                self.regroup();
            }
            Message::ToggleTypeFilter(toggle) => {
                let types = &mut self.filters.message_type;
                match toggle {
                    TypeToggle::Bot => types.bot = !types.bot,
                    TypeToggle::Customer => types.customer = !types.customer,
                    TypeToggle::Business => types.business = !types.business,
                    TypeToggle::Deleted => types.deleted = !types.deleted,
                }
                self.regroup();
            }
            Message::ResetFilters => {
                self.filters.reset();
                self.query.clear();
                self.regroup();
            }
            Message::SelectMessage(index) => {
                self.navigator.select(index);
            }
            Message::KeyPressed(action) => {
                return self.handle_keyboard_action(action);
            }
            Message::CopiedCleared => {
                self.navigator.clear_copied();
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = match self.settings.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                self.apply_theme();
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::MoveNext => {
                self.navigator.move_next();
            }
            KeyboardAction::MovePrev => {
                self.navigator.move_prev();
            }
            KeyboardAction::Copy => {
                // Clipboard write is fire-and-forget; the badge expires on a
                // timer either way.
                if let Some(index) = self.navigator.activate()
                    && let Some(message) = self.feed.message_at(index)
                {
                    let text = message.message_text.clone();
                    return Task::batch([
                        iced::clipboard::write(text),
                        Task::perform(copied_badge_delay(), |()| Message::CopiedCleared),
                    ]);
                }
            }
            KeyboardAction::Deselect => {
                self.navigator.deselect();
            }
            KeyboardAction::Refresh => {
                return Task::done(Message::Refetch);
            }
        }
        Task::none()
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(&self.query, self.settings.theme_mode);
        let total = self.messages.iter().filter(|m| !m.is_deleted).count();
        let filters = view::view_filters(&self.filters, self.feed.len(), total);
        let feed = view::view_feed(
            &self.feed,
            &self.query,
            self.navigator.active(),
            self.navigator.copied(),
            self.is_loading,
            self.error_message.as_deref(),
            !self.messages.is_empty(),
        );

        column![header, filters, feed]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Subscribe to keyboard events for navigation shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        Key::Named(keyboard::key::Named::ArrowDown) => {
            Some(Message::KeyPressed(KeyboardAction::MoveNext))
        }
        Key::Named(keyboard::key::Named::ArrowUp) => {
            Some(Message::KeyPressed(KeyboardAction::MovePrev))
        }
        Key::Named(keyboard::key::Named::Enter) => Some(Message::KeyPressed(KeyboardAction::Copy)),
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Deselect))
        }
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        // Ctrl+C: copy the active message
        Key::Character(c) if ctrl && c.as_str() == "c" => {
            Some(Message::KeyPressed(KeyboardAction::Copy))
        }
        _ => None,
    }
}

/// Waits out the copied-badge lifetime.
async fn copied_badge_delay() {
    tokio::time::sleep(COPIED_BADGE_DURATION).await;
}

/// Fetches the message snapshot for the GUI.
async fn load_messages(
    client: reqwest::Client,
    endpoint: String,
) -> Result<Vec<ChatMessage>, String> {
    chatfeed_core::fetch_messages(&client, &endpoint)
        .await
        .map_err(|e| e.to_string())
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("chatfeed")
        .join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("chatfeed");

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!("Settings saved to {:?}", settings_path);
    Ok(())
}

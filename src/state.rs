use crate::dialog::{AppConfig, DialogPreset, load_or_create_config};
use tracing::warn;

pub const MAX_EVENTS: usize = 50;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub active_preset: Option<String>,
    /// Newest first.
    pub events: Vec<LogEvent>,
    pub message: Option<Message>,
    next_event_seq: u64,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LogEvent {
    /// Increases by one per event; stable for the event's lifetime.
    pub seq: u64,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(AppConfig::new())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let active_preset = config.presets.first().map(|p| p.name.clone());
        Self {
            config,
            active_preset,
            events: Vec::new(),
            message: None,
            next_event_seq: 0,
        }
    }

    /// Loads the user config, falling back to defaults with an error message.
    pub fn load() -> Self {
        match load_or_create_config() {
            Ok(config) => Self::with_config(config),
            Err(e) => {
                warn!("Failed to load config, using defaults: {}", e);
                let mut state = Self::new();
                state.set_message(Message::error(format!("Failed to load config: {}", e)));
                state
            }
        }
    }

    pub fn preset_names(&self) -> Vec<String> {
        self.config.presets.iter().map(|p| p.name.clone()).collect()
    }

    pub fn active_preset(&self) -> Option<&DialogPreset> {
        self.active_preset
            .as_deref()
            .and_then(|name| self.config.find_preset(name))
    }

    /// Returns false if no preset has that name.
    pub fn select_preset(&mut self, name: &str) -> bool {
        if self.config.find_preset(name).is_none() {
            return false;
        }
        self.active_preset = Some(name.to_string());
        true
    }

    pub fn push_event(&mut self, text: impl Into<String>) {
        let event = LogEvent {
            seq: self.next_event_seq,
            text: text.into(),
        };
        self.next_event_seq += 1;
        self.events.insert(0, event);
        self.events.truncate(MAX_EVENTS);
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

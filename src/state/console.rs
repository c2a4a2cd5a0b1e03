// Console state management.
// In-app activity log with levels, timestamps, and an unread counter.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Warn,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Complete state for the Console tab.
#[derive(Debug, Default)]
pub struct ConsoleState {
    /// Console messages (activity log).
    pub messages: Vec<ConsoleMessage>,
    /// List state for message scrolling.
    pub list_state: ListState,
    /// Warnings and errors added since the tab was last viewed.
    pub unread: usize,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.messages.push(ConsoleMessage::info(message));
        self.scroll_to_bottom();
    }

    /// Add a warning message.
    pub fn log_warn(&mut self, message: impl Into<String>) {
        self.messages.push(ConsoleMessage::warn(message));
        self.unread += 1;
        self.scroll_to_bottom();
    }

    /// Add an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.messages.push(ConsoleMessage::error(message));
        self.unread += 1;
        self.scroll_to_bottom();
    }

    /// Clear the unread badge when the console tab is opened.
    pub fn mark_viewed(&mut self) {
        self.unread = 0;
    }

    /// Scroll message list to bottom.
    fn scroll_to_bottom(&mut self) {
        if !self.messages.is_empty() {
            self.list_state.select(Some(self.messages.len() - 1));
        }
    }

    /// Select previous message in list.
    pub fn select_prev(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => self.messages.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Select next message in list.
    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.messages.len() - 1 {
                    i
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

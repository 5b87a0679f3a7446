// src/lib.rs

pub mod chat_message;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod modal;
pub mod timers;
pub mod transcript;
pub mod ui;
pub mod widget;

use crate::widget::ChatWidget;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Chat,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub state: AppState,
    pub widget: ChatWidget,
}

impl App {
    pub fn new() -> App {
        App {
            state: AppState::Chat,
            widget: ChatWidget::new(Instant::now()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

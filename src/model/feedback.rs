//! Single-slot UI registers: the toast notification and the delete confirmation.
//!
//! Each holds at most one active value. Raising a new one overwrites the old one.

use serde::{Deserialize, Serialize};

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

/// Transient feedback message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub show: bool,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn shown(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            show: true,
            message: message.into(),
            kind,
        }
    }

    /// Hides the toast. Message and kind are kept so an exit animation can still draw them.
    pub fn hide(&mut self) {
        self.show = false;
    }
}

/// Pending delete confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Confirmation {
    pub is_open: bool,
    pub target_id: String,
    pub target_name: String,
}

impl Confirmation {
    pub fn open(target_id: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            is_open: true,
            target_id: target_id.into(),
            target_name: target_name.into(),
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

use chrono::{DateTime, Duration, Utc};

/// How long a notification stays on screen.
pub const TOAST_LIFETIME_MS: i64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at: now + Duration::milliseconds(TOAST_LIFETIME_MS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

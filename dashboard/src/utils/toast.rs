use std::sync::Mutex;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{error, info};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + Duration::seconds(TOAST_LIFETIME_SECS)
    }

    /// Icon and message, as displayed.
    pub fn text(&self) -> String {
        format!("{} {}", self.kind.icon(), self.message)
    }
}

#[derive(Default)]
struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Short-lived notifications. Expired toasts are dropped on the next read.
#[derive(Default)]
pub struct Toaster {
    queue: Mutex<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> Toast {
        self.show_at(kind, message, Utc::now())
    }

    pub fn show_at(&self, kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) -> Toast {
        let message = message.into();
        match kind {
            ToastKind::Error => error!(message = %message, "toast"),
            _ => info!(message = %message, kind = ?kind, "toast"),
        }

        let mut queue = self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        queue.next_id += 1;
        let toast = Toast {
            id: queue.next_id,
            kind,
            message,
            shown_at: now,
        };
        queue.toasts.push(toast.clone());
        toast
    }

    pub fn success(&self, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Info, message)
    }

    pub fn visible(&self) -> Vec<Toast> {
        self.visible_at(Utc::now())
    }

    /// Oldest first.
    pub fn visible_at(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut queue = self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        queue.toasts.retain(|t| t.expires_at() > now);
        queue.toasts.clone()
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        queue.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_toasts_expire_after_three_seconds() {
        let t0 = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
        let toaster = Toaster::new();
        let saved = toaster.show_at(ToastKind::Success, "Đã lưu thay đổi", t0);
        toaster.show_at(ToastKind::Error, "Không thể kết nối Supabase", t0 + Duration::seconds(2));

        assert_eq!(saved.text(), "✓ Đã lưu thay đổi");
        assert_eq!(toaster.visible_at(t0 + Duration::milliseconds(2999)).len(), 2);

        let remaining = toaster.visible_at(t0 + Duration::seconds(3));
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind.icon(), "✗");

        assert!(toaster.visible_at(t0 + Duration::seconds(5)).is_empty());
    }

    #[test]
    fn test_dismiss() {
        let toaster = Toaster::new();
        let toast = toaster.info("Đang tải...");
        assert_eq!(toast.text(), "ℹ Đang tải...");
        toaster.dismiss(toast.id);
        assert!(toaster.visible().is_empty());
    }
}

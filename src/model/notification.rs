//! Notification model
//!
//! Temporary feedback messages shown in the view title bar
//! (export results, pipeline toggles, etc.)

use std::time::Instant;

/// How long a notification stays visible
const NOTIFICATION_TTL_SECS: u64 = 5;

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Success - operation completed (green)
    Success,
    /// Info - informational message (cyan)
    Info,
    /// Warning - caution message (yellow)
    Warning,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was created
    pub created_at: Instant,
}

impl Notification {
    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    /// Check if the notification has outlived its display window
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= NOTIFICATION_TTL_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_success() {
        let n = Notification::success("Exported 3 rows");
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, "Exported 3 rows");
    }

    #[test]
    fn test_notification_info() {
        let n = Notification::info("Noise filter: on");
        assert_eq!(n.kind, NotificationKind::Info);
    }

    #[test]
    fn test_notification_warning() {
        let n = Notification::warning("Nothing to export");
        assert_eq!(n.kind, NotificationKind::Warning);
    }

    #[test]
    fn test_notification_not_expired_immediately() {
        let n = Notification::success("Test");
        assert!(!n.is_expired());
    }
}

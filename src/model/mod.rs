//! Data models for gci
//!
//! UI-independent data structures: parsed commit records, classified
//! commits, (date, category) groups, and notifications.

mod commit;
mod group;
mod notification;

pub use commit::{ClassifiedCommit, CommitRecord};
pub use group::{CommitGroup, GroupEntry};
pub use notification::{Notification, NotificationKind};

//! High-priority task alerts
//!
//! Alerts are permission-gated: the user opts in once (`tm alerts enable`)
//! and the decision persists in `config.toml`. An alert goes out only for
//! a high-priority task while permission is granted at emission time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::task::{Priority, Task};

/// Title used for every high-priority alert.
pub const ALERT_TITLE: &str = "High Priority Task Alert";

/// Alert permission state, persisted in `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Never asked
    #[default]
    Unset,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default)]
    pub permission: Permission,
}

/// Destination for task alerts. The tag deduplicates repeated alerts
/// for the same task.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str, tag: &str);
}

/// Renders alerts to the terminal with a bell.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, title: &str, body: &str, tag: &str) {
        debug!("Alert [{}]: {}", tag, title);
        println!("\x07\u{1F514} {}", title);
        println!("   {}", body);
    }
}

/// Resolve a permission request. An earlier grant or denial is final
/// and does not re-consult the user; only an unset state does.
pub fn request_permission(current: Permission, user_grants: bool) -> Permission {
    match current {
        Permission::Granted => Permission::Granted,
        Permission::Denied => Permission::Denied,
        Permission::Unset => {
            if user_grants {
                Permission::Granted
            } else {
                Permission::Denied
            }
        }
    }
}

/// Emit an alert for `task` if it is high priority and permission is
/// granted right now. Returns whether an alert went out. Never fails
/// and never blocks the surrounding flow.
pub fn send_task_alert(notifier: &dyn Notifier, permission: Permission, task: &Task) -> bool {
    if task.priority != Priority::High || permission != Permission::Granted {
        return false;
    }

    let body = format!(
        "{} - This is a high priority task that needs your attention!",
        task.title
    );
    notifier.notify(ALERT_TITLE, &body, &task.id);
    true
}

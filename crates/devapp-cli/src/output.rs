//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use devapp_client::{Notification, NotificationKind, NotificationStore};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a single notification.
pub fn notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Success => println!("{} {}", "✓".green(), notification.message),
        NotificationKind::Error => eprintln!("{} {}", "✗".red(), notification.message),
        NotificationKind::Warning => eprintln!("{} {}", "!".yellow(), notification.message),
        NotificationKind::Info => println!("{} {}", "i".blue(), notification.message),
    }
}

/// Render every pending notification, oldest first, then drop them.
pub fn render(store: &NotificationStore) {
    for entry in store.notifications() {
        notification(&entry);
    }
    store.clear();
}

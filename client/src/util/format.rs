//! Display formatting for feed values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

/// Calendar date of a comment, e.g. `Jan 1, 2024`.
pub fn comment_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%b %-d, %Y").to_string()
}

/// Submit label for a form button, switching while a request is in flight.
pub fn busy_label(busy: bool, idle: &'static str, pending: &'static str) -> &'static str {
    if busy { pending } else { idle }
}

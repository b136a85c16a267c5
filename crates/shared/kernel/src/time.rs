//! Clock helpers with the exact formats the stored blobs use.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Returns a creation-time id: the current epoch time in milliseconds.
///
/// Monotonic via the wall clock; uniqueness is best-effort under rapid
/// creation, which is acceptable for the player list (the caller may bump the
/// id when it collides with an existing one).
#[must_use]
pub fn creation_id() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current instant as an RFC 3339 string, the `lastSaved` wire format.
#[must_use]
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Formats an instant the way history entries display it, e.g. `Sep 1, 5:04 PM`.
#[must_use]
pub fn display_timestamp(at: DateTime<Local>) -> String {
    at.format("%b %-d, %-I:%M %p").to_string()
}

/// [`display_timestamp`] for the current local time.
#[must_use]
pub fn now_display() -> String {
    display_timestamp(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn creation_ids_are_positive_and_ordered() {
        let first = creation_id();
        let second = creation_id();
        assert!(first > 0);
        assert!(second >= first);
    }

    #[test]
    fn display_timestamp_matches_site_format() {
        let at = Local.with_ymd_and_hms(2025, 9, 1, 17, 4, 0).unwrap();
        assert_eq!(display_timestamp(at), "Sep 1, 5:04 PM");
    }

    #[test]
    fn rfc3339_roundtrips() {
        let stamp = now_rfc3339();
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

/// Label used for anything that just happened (previews, fresh posts).
pub const JUST_NOW: &str = "Just now";

/// Chat bubble time, e.g. "09:41 PM".
pub fn message_time(now: DateTime<Local>) -> String {
    now.format("%I:%M %p").to_string()
}

pub fn message_time_now() -> String {
    message_time(Local::now())
}

/// Synthetic id for a session-local record: `<prefix>_<unix millis>-<8 hex>`.
/// The random tail keeps two records created in the same millisecond apart.
pub fn synthetic_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let tail = Uuid::new_v4().simple().to_string();
    format!("{}_{}-{}", prefix, millis, &tail[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn message_time_is_zero_padded_twelve_hour() {
        let dt = Local.with_ymd_and_hms(2024, 1, 5, 21, 7, 0).single().unwrap();
        assert_eq!(message_time(dt), "09:07 PM");
    }

    #[test]
    fn synthetic_ids_are_prefixed_and_distinct() {
        let a = synthetic_id("msg");
        let b = synthetic_id("msg");
        assert!(a.starts_with("msg_"));
        assert_ne!(a, b);
    }
}

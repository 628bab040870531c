//! Local timezone labels.
//!
//! Labels are display-only hints. Stored values never depend on them.
use tracing::debug;

const FALLBACK_TIMEZONE: &str = "UTC";

/// Returns the runtime's IANA timezone identifier, or `"UTC"` when the
/// platform cannot report one.
pub fn local_timezone_id() -> String {
    match iana_time_zone::get_timezone() {
        Ok(id) => id,
        Err(err) => {
            debug!("falling back to {FALLBACK_TIMEZONE}: {err}");
            FALLBACK_TIMEZONE.to_string()
        }
    }
}

/// Returns a short label for the local timezone, such as `Sao Paulo`.
pub fn local_timezone_label() -> String {
    timezone_label(&local_timezone_id())
}

/// Shortens an IANA identifier to its last path segment with underscores
/// replaced by spaces.
pub fn timezone_label(id: &str) -> String {
    let segment = id.rsplit('/').next().unwrap_or(id).trim();
    if segment.is_empty() {
        return FALLBACK_TIMEZONE.to_string();
    }
    segment.replace('_', " ")
}

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Attribute set on items written with put or insert.
pub const CREATED_AT: &str = "CreatedAt";

/// Attribute set on items written with update.
pub const UPDATED_AT: &str = "UpdatedAt";

/// Current time as ISO-8601 UTC without sub-seconds, e.g.
/// `2020-02-15T19:09:38`.
pub(crate) fn now() -> String {
    format(OffsetDateTime::now_utc())
}

fn format(at: OffsetDateTime) -> String {
    // Every component is present on an OffsetDateTime, so this cannot fail.
    at.to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]"
        ))
        .unwrap_or_default()
}

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

/// Issues a new random identifier.
///
/// This is the only source of ids for layers, nodes and drawn features. Every
/// id-keyed tree operation assumes ids are unique, which holds as long as all
/// ids come from here.
#[must_use]
pub fn generate_id() -> String {
	Uuid::new_v4().to_string()
}

/// Current UTC time as an RFC 3339 / ISO-8601 string.
#[must_use]
pub fn timestamp_now() -> String {
	format_timestamp(OffsetDateTime::now_utc())
}

#[must_use]
pub fn format_timestamp(time: OffsetDateTime) -> String {
	time
		.format(&Rfc3339)
		.unwrap_or_else(|_| time.unix_timestamp().to_string())
}

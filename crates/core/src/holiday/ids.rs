use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Prefix that marks identifiers assigned by the local cache.
pub const LOCAL_ID_PREFIX: &str = "h_";

/// Length of the random suffix of a local identifier.
const LOCAL_ID_SUFFIX_LEN: usize = 9;

/// Returns false for identifiers that must never reach a backend: empty
/// strings and the `"undefined"` / `"null"` sentinels.
pub fn is_valid_holiday_id(id: &str) -> bool {
    let trimmed = id.trim();
    !(trimmed.is_empty() || trimmed == "undefined" || trimmed == "null")
}

/// Generates an identifier for a record created without the remote backend.
///
/// Pattern: `h_<unix-millis>_<9 lowercase alphanumerics>`
pub fn generate_local_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(LOCAL_ID_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();

    format!(
        "{LOCAL_ID_PREFIX}{}_{suffix}",
        Utc::now().timestamp_millis()
    )
}

/// Returns true if the identifier was assigned by the local cache.
pub fn is_local_id(id: &str) -> bool {
    id.starts_with(LOCAL_ID_PREFIX)
}

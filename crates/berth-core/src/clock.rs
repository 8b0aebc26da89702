use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Current UTC time as an RFC3339 string.
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("RFC3339 formatting should not fail")
}

/// Current time as unix epoch seconds.
pub fn epoch_now() -> u64 {
    u64::try_from(OffsetDateTime::now_utc().unix_timestamp()).unwrap_or(0)
}

/// Parse an RFC3339 timestamp to epoch seconds. `None` on any parse failure.
pub fn parse_rfc3339_to_epoch(ts: &str) -> Option<u64> {
    OffsetDateTime::parse(ts.trim(), &Rfc3339)
        .ok()
        .and_then(|dt| u64::try_from(dt.unix_timestamp()).ok())
}

/// RFC3339 string for an epoch-seconds value.
pub fn rfc3339_from_epoch(epoch: u64) -> String {
    OffsetDateTime::from_unix_timestamp(i64::try_from(epoch).unwrap_or(0))
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .format(&Rfc3339)
        .expect("RFC3339 formatting should not fail")
}

/// Age in whole seconds of an RFC3339 timestamp relative to now.
/// Unparseable timestamps read as infinitely old, so staleness checks
/// treat corrupt records the same as long-dead ones.
pub fn age_secs(ts: &str) -> u64 {
    match parse_rfc3339_to_epoch(ts) {
        Some(then) => epoch_now().saturating_sub(then),
        None => u64::MAX,
    }
}

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

const PLACEHOLDER: &str = "-";
// Vietnam has no daylight saving
const VIETNAM_UTC_OFFSET_HOURS: i64 = 7;

fn render(input: &str, pattern: &str) -> String {
    parse_timestamp(input)
        .map(|ts| (ts + Duration::hours(VIETNAM_UTC_OFFSET_HOURS)).naive_utc().format(pattern).to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Accepts RFC 3339 timestamps, zone-less timestamps and bare dates. The
/// last two are read as UTC.
fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `dd/mm/yyyy` in Vietnam time, `-` for anything unparsable.
pub fn format_date(input: &str) -> String {
    render(input, "%d/%m/%Y")
}

/// `HH:MM dd/mm/yyyy` in Vietnam time, `-` for anything unparsable.
pub fn format_date_time(input: &str) -> String {
    render(input, "%H:%M %d/%m/%Y")
}

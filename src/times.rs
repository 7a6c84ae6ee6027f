use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};

/// Assumed game length; a game this far past its start time counts as over.
const GAME_DURATION_SECS: i64 = 10_800;

/// Parse a feed timestamp as a UTC instant.
///
/// The feed normally sends RFC 3339 with a `Z` suffix, but bare timestamps
/// without an offset show up too and are treated as UTC.
fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Convert an ISO UTC time string to an Eastern Time display string, e.g.
/// `"8:30 PM ET - 10/05/2025"`. Returns an empty string when the input
/// does not parse.
///
/// Uses a month-range daylight saving approximation (-4h for March through
/// November, -5h otherwise) rather than real transition dates.
pub fn utc_to_eastern(raw: &str) -> String {
    let Some(utc) = parse_utc(raw) else {
        return String::new();
    };
    let offset_hours = if (3..=11).contains(&utc.month()) {
        -4
    } else {
        -5
    };
    let et = utc + Duration::hours(offset_hours);
    let (is_pm, hour) = et.hour12();
    format!(
        "{}:{:02} {} ET - {:02}/{:02}/{}",
        hour,
        et.minute(),
        if is_pm { "PM" } else { "AM" },
        et.month(),
        et.day(),
        et.year()
    )
}

/// Coarse status label for a game relative to `now`: `"Finished"`,
/// `"Started"`, or a countdown like `"In 1h 5m"` / `"In 12m"`.
/// Returns an empty string when the input does not parse.
pub fn game_status(raw: &str, now: DateTime<Utc>) -> String {
    let Some(start) = parse_utc(raw) else {
        return String::new();
    };
    let delta = (start - now).num_seconds();
    if delta < -GAME_DURATION_SECS {
        "Finished".to_string()
    } else if delta < 0 {
        "Started".to_string()
    } else {
        let hours = delta / 3600;
        let minutes = (delta % 3600) / 60;
        if hours > 0 {
            format!("In {}h {}m", hours, minutes)
        } else {
            format!("In {}m", minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_eastern_summer_offset() {
        // July: -4h
        assert_eq!(utc_to_eastern("2025-07-04T20:00:00Z"), "4:00 PM ET - 07/04/2025");
        // October, crossing noon
        assert_eq!(utc_to_eastern("2025-10-05T16:00:00Z"), "12:00 PM ET - 10/05/2025");
    }

    #[test]
    fn test_eastern_winter_offset_rolls_date_back() {
        // January: -5h, lands on the previous calendar day
        assert_eq!(utc_to_eastern("2025-01-15T03:30:00Z"), "10:30 PM ET - 01/14/2025");
        assert_eq!(utc_to_eastern("2025-12-25T18:05:00Z"), "1:05 PM ET - 12/25/2025");
    }

    #[test]
    fn test_eastern_no_leading_zero_hour() {
        assert_eq!(utc_to_eastern("2025-06-01T13:09:00Z"), "9:09 AM ET - 06/01/2025");
    }

    #[test]
    fn test_eastern_bare_timestamp_treated_as_utc() {
        assert_eq!(utc_to_eastern("2025-07-04T20:00:00"), "4:00 PM ET - 07/04/2025");
    }

    #[test]
    fn test_eastern_malformed_is_empty() {
        assert_eq!(utc_to_eastern(""), "");
        assert_eq!(utc_to_eastern("not-a-date"), "");
        assert_eq!(utc_to_eastern("2025-13-40T99:00:00Z"), "");
    }

    #[test]
    fn test_status_boundaries() {
        let now = at(2025, 10, 5, 18, 0, 0);
        let start = |secs: i64| (now + Duration::seconds(secs))
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

        assert_eq!(game_status(&start(-10801), now), "Finished");
        assert_eq!(game_status(&start(-10800), now), "Started");
        assert_eq!(game_status(&start(-10799), now), "Started");
        assert_eq!(game_status(&start(-1), now), "Started");
        assert_eq!(game_status(&start(0), now), "In 0m");
    }

    #[test]
    fn test_status_countdown() {
        let now = at(2025, 10, 5, 18, 0, 0);
        let start = |secs: i64| (now + Duration::seconds(secs))
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

        assert_eq!(game_status(&start(3661), now), "In 1h 1m");
        assert_eq!(game_status(&start(59), now), "In 0m");
        assert_eq!(game_status(&start(3599), now), "In 59m");
        assert_eq!(game_status(&start(7320), now), "In 2h 2m");
    }

    #[test]
    fn test_status_malformed_is_empty() {
        let now = at(2025, 10, 5, 18, 0, 0);
        assert_eq!(game_status("", now), "");
        assert_eq!(game_status("tonight", now), "");
    }
}

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::errors::ServiceError;

/// Parse the `/biodata/date/{date}` path parameter.
///
/// Accepts RFC 3339 or a plain `YYYY-MM-DD` day (taken as midnight UTC).
/// The result feeds an inclusive `date >= since` filter: the by-date route
/// is a one-sided range, not an exact-day match.
pub fn parse_since(raw: &str) -> Result<DateTime<Utc>, ServiceError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)));
    }
    Err(ServiceError::Validation(format!("unparseable date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_plain_day_as_midnight_utc() {
        let dt = parse_since("2024-01-05").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339() {
        let dt = parse_since("2024-03-01T12:30:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_since("not-a-date"),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn lower_bound_is_inclusive() {
        let record = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        assert!(record >= parse_since("2024-01-05").unwrap());
        assert!(record >= parse_since("2024-01-10").unwrap());
        assert!(record < parse_since("2024-02-01").unwrap());
    }
}
